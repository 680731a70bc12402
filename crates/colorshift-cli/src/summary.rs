use colorshift_core::config::CurveSpec;
use colorshift_core::effect::{EffectInfo, Property, ShiftParameter};
use colorshift_core::pipeline::config::RenderConfig;
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    animated: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            animated: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(config: &RenderConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Color Shift Render"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(format!(
            "{}..={} ({})",
            config.frames.start,
            config.frames.end,
            config.frames.len()
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Shift"));
    for param in ShiftParameter::ALL {
        let text = match config.effect.get(param) {
            None => s.label.apply_to(format!("{} (default)", param.default_value())),
            Some(CurveSpec::Constant(v)) => s.value.apply_to(format!("{v}")),
            Some(CurveSpec::Keyframe(k)) => {
                s.animated.apply_to(format!("{} keyframe(s)", k.points().len()))
            }
        };
        println!("    {:<14}{}", s.label.apply_to(param.key()), text);
    }
    println!();
}

pub fn print_properties(
    info: &EffectInfo,
    frame: u64,
    dimensions: Option<(usize, usize)>,
    properties: &[Property],
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(info.name));
    println!("  {}", s.label.apply_to(info.description));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frame"),
        s.value.apply_to(frame)
    );
    if let Some((w, h)) = dimensions {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.value.apply_to(format!("{w}x{h}"))
        );
    }
    println!();

    for prop in properties {
        let pixels = prop
            .pixels
            .map(|px| format!("  ({px} px)"))
            .unwrap_or_default();
        println!(
            "  {:<16}{}{}",
            s.label.apply_to(&prop.label),
            s.value.apply_to(format!("{:+.4}", prop.value)),
            s.animated.apply_to(pixels)
        );
    }
    println!();
}
