use clap::Parser;
use keytree::presentation::ConsoleView;
use keytree::{Cli, Config, Settings, render_keyspace};
use keytree_testing::MemoryStore;
use keytree_testing::fixtures::{mixed_keyspace, tasks_keyspace};

fn settings(args: &[&str], config: Config) -> Settings {
    let mut argv = vec!["keytree"];
    argv.extend_from_slice(args);
    Settings::resolve(&Cli::try_parse_from(argv).unwrap(), config)
}

fn render(store: &mut MemoryStore, settings: &Settings, view: ConsoleView) -> (usize, String) {
    let mut out = Vec::new();
    let count = render_keyspace(store, settings, view, &mut out).unwrap();
    (count, String::from_utf8(out).unwrap())
}

#[test]
fn test_plain_tree() {
    let mut store = tasks_keyspace();
    let (count, output) = render(&mut store, &settings(&[], Config::default()), ConsoleView::new(false));

    assert_eq!(count, 5);
    insta::assert_snapshot!(output, @r"
    └── tasks
        ├── a
        │   ├── 1 # string  one
        │   └── 2 # string  two
        └── b # string  beta
    ");
}

#[test]
fn test_colored_tree() {
    let mut store = MemoryStore::new().with_string("greeting", "hello").with_ttl("greeting", 30);
    let (_, output) = render(&mut store, &settings(&[], Config::default()), ConsoleView::new(true));

    assert_eq!(
        output,
        "└── \u{1b}[34mgreeting\u{1b}[39m # \u{1b}[33mstring\u{1b}[39m \u{1b}[31m30\u{1b}[39m hello\n"
    );
}

#[test]
fn test_patterns_and_only_keys_from_flags() {
    let mut store = mixed_keyspace();
    let settings = settings(&["-k", "queue:*", "greeting"], Config::default());
    let (_, output) = render(&mut store, &settings, ConsoleView::new(false));

    assert_eq!(output, "├── greeting # string 30\n└── queue\n    └── jobs # list 120\n");
    assert!(store.value_reads().is_empty());
}

#[test]
fn test_config_file_options() {
    let config = Config {
        separator: Some("/".into()),
        wrap: Some(false),
        ascii: Some(true),
        ..Config::default()
    };
    let mut store = MemoryStore::new()
        .with_list("app/jobs", &["a", "b"])
        .with_string("app/name", "demo");
    let (_, output) = render(&mut store, &settings(&[], config), ConsoleView::new(false));

    assert_eq!(
        output,
        "`-- app\n    |-- jobs # list  [\"a\",\"b\"]\n    `-- name # string  demo\n"
    );
}

#[test]
fn test_no_matches_prints_nothing() {
    let mut store = tasks_keyspace();
    let (count, output) = render(
        &mut store,
        &settings(&["metrics:*"], Config::default()),
        ConsoleView::new(false),
    );

    assert_eq!(count, 0);
    assert!(output.is_empty());
}

#[test]
fn test_wrap_flag_restores_wrapping_disabled_in_config() {
    let config = Config {
        wrap: Some(false),
        ..Config::default()
    };
    let mut store = MemoryStore::new()
        .with_list("jobs", &["a", "b"])
        .with_string("name", "demo");
    let (_, output) = render(&mut store, &settings(&["--wrap"], config), ConsoleView::new(false));

    assert_eq!(
        output,
        "├── jobs # list  [\n│   \"a\",\n│   \"b\"\n│]\n└── name # string  demo\n"
    );
}
