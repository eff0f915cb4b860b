fn main() {
    phub_web::launch();
}
