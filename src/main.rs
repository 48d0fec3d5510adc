mod app;
mod audio;
mod config;
mod dialog;
mod library;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
