// エンドツーエンド統合テスト
mod fixtures;

use dir_sum::{
    core::ConcurrencyMode,
    engine::{create_memory_dispatcher, WorkDispatcher},
    services::{DefaultScanConfig, MemoryReporter},
    storage::local::LocalStorageBackend,
};
use fixtures::{build_tree, create_dir, numbered_tree, scenario_tree, triangular, write_file};
use std::time::Duration;

fn quiet_config() -> DefaultScanConfig {
    DefaultScanConfig::new().with_task_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_scenario_total_and_lines() {
    let temp_dir = scenario_tree();
    let (dispatcher, reporter) = create_memory_dispatcher(quiet_config());

    let summary = dispatcher.run(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total, 30);
    assert_eq!(
        reporter.sorted_lines(),
        vec!["a.txt: 10", "b.txt: 20", "c.txt: no number"]
    );
    assert_eq!(reporter.totals(), vec![30]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_total_is_independent_of_concurrency_mode() {
    let temp_dir = numbered_tree(200);
    let expected = triangular(200);

    for mode in [
        ConcurrencyMode::Unbounded,
        ConcurrencyMode::Pool(1),
        ConcurrencyMode::Pool(3),
        ConcurrencyMode::Pool(64),
    ] {
        let (dispatcher, reporter) =
            create_memory_dispatcher(quiet_config().with_concurrency(mode));
        let summary = dispatcher.run(temp_dir.path()).await.unwrap();

        assert_eq!(summary.total, expected, "{mode:?}");
        assert_eq!(summary.files_processed, 200, "{mode:?}");
        assert_eq!(reporter.lines().len(), 200, "{mode:?}");
    }
}

#[tokio::test]
async fn test_integer_literals_are_reported_verbatim() {
    let temp_dir = build_tree(&[
        ("pos.txt", "42"),
        ("neg.txt", "-7"),
        ("zero.txt", "0"),
        ("padded.txt", "  15\n"),
    ]);
    let (dispatcher, reporter) = create_memory_dispatcher(quiet_config());

    let summary = dispatcher.run(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total, 42 - 7 + 15);
    assert_eq!(summary.numbers_parsed, 4);
    assert_eq!(
        reporter.sorted_lines(),
        vec!["neg.txt: -7", "padded.txt: 15", "pos.txt: 42", "zero.txt: 0"]
    );
}

#[tokio::test]
async fn test_non_numeric_files_contribute_zero() {
    let temp_dir = build_tree(&[
        ("abc.txt", "abc"),
        ("partial.txt", "42x"),
        ("empty.txt", ""),
        ("blank.txt", "   \n\t  "),
        ("ok.txt", "5"),
    ]);
    let (dispatcher, reporter) = create_memory_dispatcher(quiet_config());

    let summary = dispatcher.run(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total, 5);
    assert_eq!(summary.no_number_count, 4);
    assert_eq!(
        reporter.sorted_lines(),
        vec![
            "abc.txt: no number",
            "blank.txt: no number",
            "empty.txt: no number",
            "ok.txt: 5",
            "partial.txt: no number",
        ]
    );
}

#[tokio::test]
async fn test_directories_never_appear_in_output() {
    let temp_dir = build_tree(&[("deep/er/still/x.txt", "3")]);
    create_dir(temp_dir.path(), "empty_one");
    create_dir(temp_dir.path(), "deep/empty_two");
    let (dispatcher, reporter) = create_memory_dispatcher(quiet_config());

    dispatcher.run(temp_dir.path()).await.unwrap();

    assert_eq!(reporter.lines(), vec!["x.txt: 3"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlinks_are_not_followed_or_counted() {
    let temp_dir = build_tree(&[("real.txt", "9")]);
    let outside = build_tree(&[("elsewhere.txt", "1000")]);
    std::os::unix::fs::symlink(
        temp_dir.path().join("real.txt"),
        temp_dir.path().join("link.txt"),
    )
    .unwrap();
    std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("linked_dir")).unwrap();

    let (dispatcher, reporter) = create_memory_dispatcher(quiet_config());
    let summary = dispatcher.run(temp_dir.path()).await.unwrap();

    assert_eq!(summary.total, 9);
    assert_eq!(reporter.lines(), vec!["real.txt: 9"]);
}

#[tokio::test]
async fn test_repeated_runs_give_same_total() {
    let temp_dir = numbered_tree(30);
    write_file(temp_dir.path(), "junk/notes.txt", "not a number");

    let reporter = MemoryReporter::new();
    let dispatcher =
        WorkDispatcher::new(LocalStorageBackend::new(), quiet_config(), reporter.clone());

    let first = dispatcher.run(temp_dir.path()).await.unwrap();
    let second = dispatcher.run(temp_dir.path()).await.unwrap();

    assert_eq!(first.total, triangular(30));
    assert_eq!(first.total, second.total);
    assert_eq!(reporter.totals(), vec![first.total, second.total]);
}
