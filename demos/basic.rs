use dominance::image::io::Reader as ImageReader;

fn main() {
    let reader = ImageReader::open("photo.jpg").unwrap();
    let img = reader.decode().unwrap();

    let colors = dominance::Extractor::new().extract_from_image(&img);

    println!("{:#?}", colors);
}
