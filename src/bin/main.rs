use barrace::start_barrace;

fn main() -> anyhow::Result<()> {
    start_barrace()
}
