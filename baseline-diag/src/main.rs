use std::io::Write;

use baseline_diag::{run, Args, Error};
use clap::Parser;
use log::info;

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{}: {:?}: {style}{}{style:#}: {}",
                ts,
                std::thread::current().id(),
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let written = run(&args)?;
    info!("Wrote {} files to {:?}", written.len(), args.out_dir);
    Ok(())
}
