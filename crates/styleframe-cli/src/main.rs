//! styleframe CLI - build, combine and render cell styles

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use styleframe::{ColorScaleConditionalFormatRule, ColorStop, Styler};

#[derive(Parser)]
#[command(name = "styleframe")]
#[command(author, version, about = "Cell style inspection tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical key of a style
    Key {
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Combine canonical keys left to right and print the result
    Combine {
        /// Style keys, as printed by `styleframe key`
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Print the native style a style renders to
    Native {
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print a color scale conditional format rule
    ColorScale {
        /// Start threshold type (min, num, percent, percentile, formula)
        #[arg(long, default_value = "min")]
        start_type: String,
        #[arg(long)]
        start_value: Option<f64>,
        #[arg(long, default_value = "red")]
        start_color: String,

        /// End threshold type
        #[arg(long, default_value = "max")]
        end_type: String,
        #[arg(long)]
        end_value: Option<f64>,
        #[arg(long, default_value = "green")]
        end_color: String,

        /// Middle stop, used only when type, value and color are all given
        #[arg(long)]
        mid_type: Option<String>,
        #[arg(long)]
        mid_value: Option<f64>,
        #[arg(long)]
        mid_color: Option<String>,

        /// Target columns, e.g. `B:D`
        #[arg(long)]
        columns: Option<String>,
    },
}

#[derive(Args)]
struct StyleArgs {
    /// Background color (hex or palette name)
    #[arg(long)]
    bg_color: Option<String>,
    #[arg(long)]
    bold: bool,
    #[arg(long)]
    font: Option<String>,
    #[arg(long)]
    font_size: Option<f64>,
    /// Font color (hex or palette name)
    #[arg(long)]
    font_color: Option<String>,
    #[arg(long)]
    number_format: Option<String>,
    #[arg(long)]
    underline: Option<String>,
    /// Border line style applied to all four edges
    #[arg(long)]
    border: Option<String>,
    #[arg(long)]
    horizontal: Option<String>,
    #[arg(long)]
    vertical: Option<String>,
    #[arg(long)]
    fill_pattern: Option<String>,
    #[arg(long)]
    indent: Option<u32>,
    #[arg(long)]
    comment_author: Option<String>,
    #[arg(long)]
    comment_text: Option<String>,
}

impl StyleArgs {
    fn to_styler(&self) -> Styler {
        let mut styler = Styler::new().with_bold(self.bold);
        if let Some(color) = &self.bg_color {
            styler = styler.with_bg_color(color);
        }
        if let Some(font) = &self.font {
            styler = styler.with_font(font.as_str());
        }
        if let Some(size) = self.font_size {
            styler = styler.with_font_size(size);
        }
        if let Some(color) = &self.font_color {
            styler = styler.with_font_color(color);
        }
        if let Some(format) = &self.number_format {
            styler = styler.with_number_format(format.as_str());
        }
        if let Some(underline) = &self.underline {
            styler = styler.with_underline(underline.as_str());
        }
        if let Some(border) = &self.border {
            styler = styler.with_border_type(border.as_str());
        }
        if let Some(align) = &self.horizontal {
            styler = styler.with_horizontal_alignment(align.as_str());
        }
        if let Some(align) = &self.vertical {
            styler = styler.with_vertical_alignment(align.as_str());
        }
        if let Some(pattern) = &self.fill_pattern {
            styler = styler.with_fill_pattern_type(pattern.as_str());
        }
        if let Some(indent) = self.indent {
            styler = styler.with_indent(indent);
        }
        if let Some(author) = &self.comment_author {
            styler = styler.with_comment_author(author.as_str());
        }
        if let Some(text) = &self.comment_text {
            styler = styler.with_comment_text(text.as_str());
        }
        styler
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Key { style } => {
            println!("{}", style.to_styler());
            Ok(())
        }
        Commands::Combine { keys } => combine(&keys),
        Commands::Native { style } => show_native(&style.to_styler()),
        Commands::ColorScale {
            start_type,
            start_value,
            start_color,
            end_type,
            end_value,
            end_color,
            mid_type,
            mid_value,
            mid_color,
            columns,
        } => {
            let mut rule = ColorScaleConditionalFormatRule::new(
                ColorStop::new(start_type, start_value, start_color),
                ColorStop::new(end_type, end_value, end_color),
            )
            .with_mid(mid_type.as_deref(), mid_value, mid_color.as_deref());

            if let Some(columns) = columns {
                rule = rule
                    .with_columns_str(&columns)
                    .with_context(|| format!("Invalid column range '{}'", columns))?;
            }

            let native = rule.rule().context("Failed to build color scale")?;
            println!("{:#?}", native);
            Ok(())
        }
    }
}

fn combine(keys: &[String]) -> Result<()> {
    let stylers = keys
        .iter()
        .map(|key| {
            key.parse::<Styler>()
                .with_context(|| format!("Invalid style key '{}'", key))
        })
        .collect::<Result<Vec<_>>>()?;

    println!("{}", Styler::combine(&stylers));
    Ok(())
}

fn show_native(styler: &Styler) -> Result<()> {
    let native = styler
        .to_native_style()
        .context("Failed to render native style")?;

    println!("{:#?}", native.style);
    if let Some(comment) = styler.generate_comment() {
        println!("Comment: {}", comment);
    }
    Ok(())
}
