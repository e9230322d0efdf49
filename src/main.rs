use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use traceview::adapters::TungsteniteSessionSource;
use traceview::app::{App, AppMessage};
use traceview::cli::{parse_args, CliCommand, LaunchOptions};
use traceview::grouping::GroupingStrategy;
use traceview::storage::SessionStore;
use traceview::websocket::WsClientConfig;
use traceview::{logging, terminal, ui};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("traceview {}", VERSION);
            Ok(())
        }
        CliCommand::Run(options) => run(options),
    }
}

fn run(options: LaunchOptions) -> Result<()> {
    color_eyre::install()?;
    logging::init();
    terminal::install_panic_hook();

    let mut config = WsClientConfig::default().with_tls(options.secure);
    if let Some(host) = &options.host {
        config = config.with_host(host.clone());
    }

    let source = Arc::new(TungsteniteSessionSource::new(config));
    let store = SessionStore::new();

    let mut app = App::new(source, store);
    if options.per_value_groups {
        app.grouping = GroupingStrategy::PerValue;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let mut terminal = terminal::setup()?;

    let result = runtime.block_on(async {
        // Shared-link startup: pre-filled field, no persistence, no toolbar
        if let Some(id) = &options.session_id {
            app.open_shared_link(id);
        }
        run_app(&mut terminal, &mut app).await
    });

    terminal::restore(&mut terminal);
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut ratatui::Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of keyboard events
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            // Keyboard and resize events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        _ => {}
                    }
                }
            }

            // Results from spawned session loads
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
