//! Command-layer behavior: verdict reporting, deletion gating, sweeps.

use git_sculpt::commands::single::{self, CheckOptions};
use git_sculpt::commands::sweep::{self, partition_branches, SweepOptions};
use git_sculpt::errors::CleanupError;
use git_sculpt::git::GitCli;

use super::helpers::*;

fn check_options(delete: bool) -> CheckOptions {
    CheckOptions {
        base: "master".to_string(),
        delete,
    }
}

fn sweep_options(assume_yes: bool) -> SweepOptions {
    SweepOptions {
        base: "master".to_string(),
        assume_yes,
    }
}

/// master plus three branches: squash-merged, never advanced, and one with
/// a change master never saw.
fn setup_mixed_repo() -> tempfile::TempDir {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    create_branch_with_file("feature/merged", "m.txt", "merged work\n", repo_root);
    squash_merge_into_master("feature/merged", repo_root);
    git(&["branch", "feature/empty"], repo_root);
    create_branch_with_file("feature/unmerged", "u.txt", "pending work\n", repo_root);

    temp_dir
}

#[test]
fn test_delete_flag_removes_squash_merged_branch() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    create_branch_with_file("feature/y", "y.txt", "feature work\n", repo_root);
    squash_merge_into_master("feature/y", repo_root);

    let backend = GitCli::new(repo_root);
    single::execute(&backend, "feature/y", &check_options(true)).expect("check and delete");

    assert!(!branch_exists("feature/y", repo_root));
}

#[test]
fn test_check_without_delete_flag_keeps_branch() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    create_branch_with_file("feature/y", "y.txt", "feature work\n", repo_root);
    squash_merge_into_master("feature/y", repo_root);

    let backend = GitCli::new(repo_root);
    single::execute(&backend, "feature/y", &check_options(false)).expect("check");

    assert!(branch_exists("feature/y", repo_root));
}

#[test]
fn test_delete_flag_on_unsafe_branch_fails_and_keeps_branch() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    create_branch_with_file("feature/z", "z.txt", "never applied\n", repo_root);
    commit_on_master("other.txt", "unrelated\n", repo_root);

    let backend = GitCli::new(repo_root);
    let err = single::execute(&backend, "feature/z", &check_options(true)).expect_err("must fail");

    assert!(matches!(
        err.downcast_ref::<CleanupError>(),
        Some(CleanupError::NotSafe(_))
    ));
    assert!(branch_exists("feature/z", repo_root));
}

#[test]
fn test_unknown_branch_fails_with_not_found() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    let backend = GitCli::new(repo_root);
    let err = single::execute(&backend, "missing", &check_options(false)).expect_err("must fail");

    assert!(matches!(
        err.downcast_ref::<CleanupError>(),
        Some(CleanupError::BranchNotFound(_))
    ));
}

#[test]
fn test_upstream_tracking_branch_is_rejected_as_not_found() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    create_branch_with_file("tracked", "t.txt", "tracked\n", repo_root);
    let _remote = track_upstream("tracked", repo_root);

    let backend = GitCli::new(repo_root);
    let err = single::execute(&backend, "tracked", &check_options(false)).expect_err("must fail");

    assert!(matches!(
        err.downcast_ref::<CleanupError>(),
        Some(CleanupError::BranchNotFound(_))
    ));
    assert!(branch_exists("tracked", repo_root));
}

#[test]
fn test_bulk_partition_matches_verdicts() {
    let temp_dir = setup_mixed_repo();
    let repo_root = temp_dir.path();

    let backend = GitCli::new(repo_root);
    let (to_remove, to_keep) = partition_branches(&backend, "master").expect("partition");

    assert!(to_remove.contains(&"feature/merged".to_string()));
    assert!(to_remove.contains(&"feature/empty".to_string()));
    assert_eq!(to_keep, vec!["feature/unmerged"]);
    assert!(!to_remove.contains(&"master".to_string()));
}

#[test]
fn test_remove_all_deletes_only_safe_branches() {
    let temp_dir = setup_mixed_repo();
    let repo_root = temp_dir.path();

    let backend = GitCli::new(repo_root);
    sweep::remove_all(&backend, &sweep_options(true)).expect("remove all");

    assert!(!branch_exists("feature/merged", repo_root));
    assert!(!branch_exists("feature/empty", repo_root));
    assert!(branch_exists("feature/unmerged", repo_root));
    assert!(branch_exists("master", repo_root));
}

#[test]
fn test_report_mode_deletes_nothing() {
    let temp_dir = setup_mixed_repo();
    let repo_root = temp_dir.path();

    let backend = GitCli::new(repo_root);
    sweep::report(&backend, &sweep_options(false)).expect("report");

    assert!(branch_exists("feature/merged", repo_root));
    assert!(branch_exists("feature/empty", repo_root));
    assert!(branch_exists("feature/unmerged", repo_root));
}

#[test]
fn test_sweep_with_no_eligible_branches_is_a_no_op() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();

    let backend = GitCli::new(repo_root);
    sweep::report(&backend, &sweep_options(false)).expect("report");
    sweep::remove_all(&backend, &sweep_options(true)).expect("remove all");

    assert!(branch_exists("master", repo_root));
}
