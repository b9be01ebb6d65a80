// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints a sample of everything the crate can produce. Set `RUST_LOG=debug` to see the
//! parse failures and terminal size fallbacks being logged.

use r3bl_colr::{BasicValue, ColorValue, JustifySpec, RgbValue, Role, RoleArg,
                STYLE_NAMES, StyleValue, StyledText, rainbow_bg_term, rainbow_fg,
                visible_length};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Basic colors, fore and back.
    {
        let line: String = (0..8u8)
            .filter_map(BasicValue::from_repr)
            .map(|it| StyledText::new(format!(" {it} ")).back(it).render())
            .collect();
        println!("{line}");
        let line: String = (10..18u8)
            .filter_map(BasicValue::from_repr)
            .map(|it| StyledText::new(format!(" {it} ")).fore(it).render())
            .collect();
        println!("{line}");
    }

    // The 256-color palette.
    {
        for row in 0..16u8 {
            let line: String = (0..16u8)
                .map(|col| {
                    let index = row * 16 + col;
                    StyledText::new(format!("{index:>4}"))
                        .back(ColorValue::Extended(index))
                        .render()
                })
                .collect();
            println!("{line}");
        }
    }

    // Styles.
    {
        for entry in STYLE_NAMES {
            println!("{}", StyledText::new(entry.name).style(entry.value));
        }
    }

    // Names typed by a user, strict and lenient.
    {
        for name in ["lightblue", "xred", "208", "#ff8000", "255;128;0", "NOTACOLOR"] {
            let arg = RoleArg::from_name(Role::Foreground, name);
            match arg.try_to_escape() {
                Ok(code) => println!("{code}{name:>12}{}", r3bl_colr::SGR_RESET),
                Err(report) => println!("{report:?}"),
            }
        }
        let title = StyledText::new("strict")
            .fore(ColorValue::try_from_name("lightgreen")?)
            .try_render()?;
        println!("{title}");
    }

    // Justified, using the real terminal width.
    {
        let banner = StyledText::new("r3bl_colr")
            .fore(RgbValue::from_u8(255, 255, 255))
            .back(RgbValue::from_u8(60, 0, 120))
            .style(StyleValue::Bright)
            .justify(JustifySpec::center(0).with_pad_char('─'));
        let rendered = banner.render();
        tracing::debug!(
            bytes = rendered.len(),
            visible = visible_length(&rendered),
            "rendered banner"
        );
        println!("{rendered}");
    }

    // Rainbows.
    {
        println!("{}", rainbow_fg("Rainbow text, one color per character.", 0.1, 0));
        println!("{}", rainbow_bg_term("Rainbow background, 256 colors.", 0.2, 7));
    }

    Ok(())
}
