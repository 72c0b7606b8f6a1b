//! Entrypoint.

fn main() -> anyhow::Result<()> {
    repograph::initialize_command_line()
}
