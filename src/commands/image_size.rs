//! Handler for the `image-size` command.

use chatmark_lib::exit_codes::SUCCESS;
use chatmark_lib::image_size::{KnownSize, SourceSize};

use crate::Context;

/// Flags of the `image-size` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSizeArgs {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub known_width: Option<f64>,
    pub known_height: Option<f64>,
    pub layout_width: Option<f64>,
    pub reply: bool,
    pub tablet: bool,
}

pub fn handle_image_size(ctx: &Context, args: ImageSizeArgs) -> anyhow::Result<i32> {
    let source = SourceSize::new(args.width, args.height);
    let known = KnownSize {
        width: args.known_width,
        height: args.known_height,
    };

    let sizer = ctx.loaded.config.images.sizer();
    log::debug!("Fallback image width: {}", sizer.fallback_width(args.reply, args.tablet));

    let size = sizer.resolve(args.reply, args.tablet, Some(&source), Some(&known), args.layout_width);

    print!("{}", ctx.formatter.format_image_size(&size));
    Ok(SUCCESS)
}
