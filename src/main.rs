fn main() -> anyhow::Result<()> {
    trie_router::cli::run_cli()
}
