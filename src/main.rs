fn main() {
    blocking_queue::app::startup::startup();
}
