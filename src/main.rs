fn main() {
    undep::run_cli();
}
