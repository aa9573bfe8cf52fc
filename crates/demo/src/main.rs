use storefront_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    storefront_observability::init(config.log_format);

    let stdout = std::io::stdout();
    storefront_demo::run(&config, &mut stdout.lock())
}
