use std::process::ExitCode;
use vk_shader_types::catalog::{self, TargetLanguage, VectorType};
use vk_shader_types::log::ProjectError;
use vk_shader_types::{log, project, warn};

fn parse_language(arg: Option<&str>) -> TargetLanguage
{
    match arg.map(str::to_ascii_lowercase).as_deref() {
        None | Some("hlsl") => TargetLanguage::Hlsl,
        Some("glsl") => TargetLanguage::Glsl,
        Some(other) => {
            warn!("Unknown shading language '{}', using {}", other, TargetLanguage::default());
            TargetLanguage::default()
        }
    }
}

/// Splits `[language] [type]` where a lone type name keeps the default language
fn parse_args(args: &[String]) -> (TargetLanguage, Option<&str>)
{
    match args.first().map(String::as_str) {
        Some(first) if VectorType::from_name(first).is_ok() => (TargetLanguage::default(), Some(first)),
        first => (parse_language(first), args.get(1).map(String::as_str)),
    }
}

fn print_type(ty: VectorType, language: TargetLanguage)
{
    println!(
        "{:<8} {:>2} bytes  fields {:<10} {:?}",
        ty.name(language),
        ty.byte_size(),
        ty.field_names().join(","),
        ty.vk_format()
    );
}

fn print_conversions(ty: VectorType, language: TargetLanguage)
{
    for rule in catalog::conversion_rules().iter().filter(|rule| rule.source == ty || rule.target == ty) {
        println!(
            "  {} -> {}  {} {}",
            rule.source.name(language),
            rule.target.name(language),
            rule.mode,
            rule.kind
        );
    }
    for bridge in catalog::host_bridges().iter().filter(|bridge| bridge.vector == ty) {
        let how = if bridge.reinterpreted { "reinterpreted" } else { "per component" };
        println!("  {} <-> {}  {} {} ({})", ty.name(language), bridge.host_type, bridge.mode(), bridge.kind(), how);
    }
}

fn main() -> ExitCode
{
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (language, type_name) = parse_args(&args);

    log!("{} {}.{} ({:#010x}), {} names", project::APP_NAME, project::VERSION_MAJOR, project::VERSION_MINOR, project::version(), language);

    match type_name {
        Some(name) => match VectorType::from_name(name) {
            Ok(ty) => {
                print_type(ty, language);
                print_conversions(ty, language);
            }
            Err(err) => {
                err.handle();
                return ExitCode::FAILURE;
            }
        },
        None => {
            for ty in VectorType::ALL {
                print_type(ty, language);
            }
            log!(
                "{} implicit and {} explicit conversions, {} host bridges",
                catalog::implicit_conversions().count(),
                catalog::explicit_conversions().count(),
                catalog::host_bridges().len()
            );
        }
    }

    ExitCode::SUCCESS
}
