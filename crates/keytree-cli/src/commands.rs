use crate::args::Cli;
use crate::config::Settings;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::ConsoleView;
use anyhow::Result;
use is_terminal::IsTerminal;
use keytree_engine::{TreeRenderer, ValueFormatter, collect_keys};
use keytree_types::KeyStore;
use std::io::{self, Write};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let settings = Settings::load(&cli)?;
    let mut ctx = ExecutionContext::open(settings)?;
    let (settings, store) = ctx.parts();

    let stdout = io::stdout();
    let view = ConsoleView::new(settings.color.enabled(stdout.is_terminal()));
    let mut out = io::BufWriter::new(stdout.lock());

    match render_keyspace(store, settings, view, &mut out).and_then(|_| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}

/// Resolve the configured patterns, then draw the tree into `out`.
///
/// Returns the number of lines written.
pub fn render_keyspace<S, W>(
    store: &mut S,
    settings: &Settings,
    view: ConsoleView,
    out: &mut W,
) -> io::Result<usize>
where
    S: KeyStore + ?Sized,
    W: Write + ?Sized,
{
    let trie = collect_keys(store, &settings.patterns, &settings.separator);
    if trie.is_empty() {
        tracing::info!(patterns = ?settings.patterns, "no keys matched");
        return Ok(0);
    }
    tracing::debug!(leaves = trie.leaf_count(), "rendering tree");

    let renderer = TreeRenderer::new(settings.separator.as_str())
        .only_keys(settings.only_keys)
        .glyphs(settings.glyphs)
        .formatter(ValueFormatter::new(settings.wrap));

    let mut written = 0;
    renderer.render(&trie, store, |line| {
        written += 1;
        view.write_line(out, &line)
    })?;
    Ok(written)
}
