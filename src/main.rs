fn main() -> anyhow::Result<()> {
    droid_session_extractor::cli::run()
}
