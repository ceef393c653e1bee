use crate::cli::Cli;
use crate::config::Settings;
use crate::error::AppError;

/// Load settings and layer command-line flags on top.
pub fn load_settings(cli: &Cli) -> Result<Settings, AppError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    apply_overrides(&mut settings, cli);
    settings.validate().map_err(AppError::ConfigUnreadable)?;
    Ok(settings)
}

pub fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(path) = &cli.path {
        settings.scan.search_path = Some(path.clone());
    }
    if let Some(delimiter) = &cli.delimiter {
        settings.scan.delimiter = delimiter.clone();
    }
    if let Some(extension) = &cli.extension {
        settings.scan.extension = extension.clone();
    }
    if let Some(output) = &cli.output {
        settings.report.out_file_name = output.clone();
    }
    if cli.overwrite {
        settings.report.append = false;
    }
    if cli.unsorted {
        settings.scan.sort = false;
    }
    if cli.follow_links {
        settings.scan.follow_links = true;
    }
}
