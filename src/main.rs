fn main() {
    incline_forces::platform::start();
}
