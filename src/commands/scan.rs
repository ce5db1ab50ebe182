//! Handler for the `scan` command.

use chatmark_lib::code_fence::scan_fenced_blocks;
use chatmark_lib::exit_codes::{NOT_RESOLVED, SUCCESS};

use crate::Context;

use super::read_input;

/// List fenced code blocks. With `strict`, a block whose language token is
/// present but unknown makes the command exit with code 1.
pub fn handle_scan(ctx: &Context, file: &str, strict: bool) -> anyhow::Result<i32> {
    let content = read_input(file)?;
    let resolver = ctx.loaded.config.language_resolver()?;

    let blocks = scan_fenced_blocks(&content, &resolver);
    let display_path = if file == "-" { "<stdin>" } else { file };

    print!("{}", ctx.formatter.format_blocks(&blocks, display_path));

    let has_unknown = blocks.iter().any(|b| !b.is_highlighted() && !b.token.is_empty());
    if strict && has_unknown {
        Ok(NOT_RESOLVED)
    } else {
        Ok(SUCCESS)
    }
}
