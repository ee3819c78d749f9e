use anyhow::Result;

use astro_starter::app_log::log_env_init;
use astro_starter::args::resolve_args;
use astro_starter::generate;

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    generate(args)?;
    Ok(())
}
