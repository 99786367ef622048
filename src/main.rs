fn main() {
    uni::run_cli();
}
