use anyhow::{Context, Result};
use env_logger::Env;

use gcovr_action::options::{self, GcovrParams};
use gcovr_action::{ActionContext, action, config};

use super::Args;

pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

pub fn run_with_args(args: &Args) -> Result<()> {
    if args.list_options {
        return list_options(args.json);
    }

    let params = resolve_params(args)?;

    let mut ctx = ActionContext::from_env();
    if args.dry_run {
        ctx.test_mode = true;
    }
    log::trace!("{ctx:?}");

    let command = action::run(&ctx, &params)?;
    if ctx.test_mode {
        println!("{command}");
    }
    Ok(())
}

fn resolve_params(args: &Args) -> Result<GcovrParams> {
    if !args.raw.is_empty() {
        return Ok(GcovrParams::Raw(args.raw.clone()));
    }
    let base = match &args.config {
        Some(path) => Some(
            config::load_params(path)
                .with_context(|| format!("load config {}", path.display()))?,
        ),
        None => None,
    };
    let params = config::merge_pairs(base, &args.options)?;
    Ok(params.unwrap_or_else(|| GcovrParams::Raw(Vec::new())))
}

fn list_options(json: bool) -> Result<()> {
    let all = options::available_options();
    if json {
        let s = serde_json::to_string_pretty(&all)?;
        println!("{}", s);
        return Ok(());
    }
    let key_width = all.iter().map(|o| o.key.len()).max().unwrap_or(0);
    let flag_width = all.iter().map(|o| o.flag.len()).max().unwrap_or(0);
    for o in &all {
        println!(
            "{:<kw$}  {:<fw$}  {}",
            o.key,
            o.flag,
            o.description,
            kw = key_width,
            fw = flag_width
        );
    }
    Ok(())
}
