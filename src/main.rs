#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    interview_generator_lib::run().await
}
