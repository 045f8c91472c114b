use android_flavor_config::cli::run;
use anyhow::Result;

fn main() -> Result<()> {
    run()
}
