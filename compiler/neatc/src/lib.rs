//! `ConfigNeat` command-line front end.
//!
//! The binary in `main.rs` only parses the command word; the commands
//! themselves live in [`commands`] so they can be tested without a process.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. `NEAT_LOG_TREE=1` switches from
/// flat lines to an indented span tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("NEAT_LOG_TREE").is_ok_and(|value| value == "1");
        if tree {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
