use anyhow::Result;
use clap::Parser;
use layerkit::cli::settings::{load_config, remember};
use layerkit::cli::{commands, Cli, Commands};
use layerkit::{init_logging, Config, EditorConfig, BUILD_DATE, VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (mut config, config_path) =
        load_config(cli.config.as_deref(), Config::default_path().ok())?;

    init_logging(config.logging.level, cli.json_logs || config.logging.json)?;
    tracing::debug!("LayerKit v{} (built {})", VERSION, BUILD_DATE);

    let mut stdout = std::io::stdout().lock();
    let input = match &cli.command {
        Commands::Info { path }
        | Commands::Layers { path }
        | Commands::Show { path, .. }
        | Commands::Strip { path, .. }
        | Commands::DeleteMove { path, .. }
        | Commands::Detour { path, .. } => path.clone(),
    };

    match cli.command {
        Commands::Info { path } => commands::info(&path, &mut stdout)?,
        Commands::Layers { path } => commands::layers(&path, &mut stdout)?,
        Commands::Show { path, layer, json } => commands::show(&path, layer, json, &mut stdout)?,
        Commands::Strip { path, output } => commands::strip(&path, &output, &mut stdout)?,
        Commands::DeleteMove {
            path,
            layer,
            move_index,
            output,
        } => commands::delete_move(&path, layer, move_index, &output, &mut stdout)?,
        Commands::Detour {
            path,
            layer,
            move_index,
            steps,
            step_size,
            lift,
            output,
        } => {
            let editor = EditorConfig {
                step_size: step_size.unwrap_or(config.editor.step_size),
                lift_height: lift.unwrap_or(config.editor.lift_height),
            };
            commands::detour(&path, layer, move_index, &steps, editor, &output, &mut stdout)?
        }
    }

    remember(&mut config, config_path.as_deref(), &input);
    Ok(())
}
