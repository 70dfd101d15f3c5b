use dominance::image::io::Reader as ImageReader;

// this demo uses a coarser sample grid than the default, which speeds up the tally further at the
// cost of sampling fewer pixels, and prints how many sampled pixels each color covered
fn main() {
    let reader = ImageReader::open("photo.jpg").unwrap();
    let img = reader.decode().unwrap();

    let colors = dominance::Extractor::new()
        .num_colors(10)
        .sample_dimensions(25, 25)
        .extract_from_image(&img);

    for color in colors {
        println!("{} covers {} sampled pixels", color.to_hex(), color.population());
    }
}
