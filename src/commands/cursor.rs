//! Handler for the `cursor` command.

use chatmark_lib::code_fence::{cursor_in_code_block, keyboard_type};
use chatmark_lib::exit_codes::{NOT_RESOLVED, SUCCESS};
use chatmark_lib::output::CursorReport;

use crate::Context;

use super::read_input;

pub fn handle_cursor(ctx: &Context, file: &str, offset: usize, check: bool) -> anyhow::Result<i32> {
    let draft = read_input(file)?;
    let length = draft.encode_utf16().count();
    if offset > length {
        log::warn!("Offset {offset} is past the end of the draft ({length} UTF-16 units)");
    }

    let report = CursorReport {
        offset,
        in_code_block: cursor_in_code_block(&draft, offset),
        keyboard: keyboard_type(&draft, offset, ctx.loaded.config.editor.code_block_keyboard),
    };

    print!("{}", ctx.formatter.format_cursor(&report));

    if check && !report.in_code_block {
        Ok(NOT_RESOLVED)
    } else {
        Ok(SUCCESS)
    }
}
