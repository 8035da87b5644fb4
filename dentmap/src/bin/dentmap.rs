//! groups geo-located listings into map markers for one viewport and writes
//! them as JSON.
use clap::Parser;
use dentmap::app::DentmapApp;

fn main() {
    env_logger::init();
    let args = DentmapApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
