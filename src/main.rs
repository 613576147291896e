use clap::Parser;
use tagdex::application::{BuildOptions, BuildSiteService, InitService, ListTagsService};
use tagdex::cli::{output, Cli, Commands};
use tagdex::domain::CdnUrlBuilder;
use tagdex::error::TagdexError;
use tagdex::infrastructure::{FileSystemRepository, SiteRepository};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagdexError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            InitService::execute(&path)?;
            println!("Initialized tagdex site in {}", path.display());
            Ok(())
        }
        Some(Commands::Build { output, pretty }) => {
            let repo = FileSystemRepository::discover()?;
            let service = BuildSiteService::new(repo);
            let summary = service.execute(BuildOptions { output, pretty })?;
            print!("{}", output::format_build_summary(&summary));
            Ok(())
        }
        Some(Commands::Tags { slugs }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListTagsService::new(repo);
            let tags = service.execute()?;
            print!("{}", output::format_tag_list(&tags, slugs));
            Ok(())
        }
        Some(Commands::MediaUrl { path, transforms }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let cloud_name = config.cdn_cloud_name().ok_or_else(|| {
                TagdexError::Config("cdn.cloud_name is not configured".to_string())
            })?;
            let builder = CdnUrlBuilder::new(cloud_name)?;
            println!("{}", builder.image_url(&path, &transforms));
            Ok(())
        }
        None => {
            println!("tagdex - tag classification and collection builder for static sites");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
