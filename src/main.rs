use logbook::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
