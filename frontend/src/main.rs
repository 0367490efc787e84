fn main() {
    hrms_frontend::start();
}
