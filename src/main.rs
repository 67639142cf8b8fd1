fn main() -> anyhow::Result<()> {
    taskord::run()
}
