use auxgl::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let eye = Vector3::new(0.0, 2.0, 6.0);
    let target = Vector3::ZERO;

    let mvp = Matrix4::camera(
        60f32.to_radians(),
        800.0 / 600.0,
        0.1,
        100.0,
        eye,
        target,
        Vector3::UP,
    );
    println!("Matrix \"camera\"\n{}", mvp);

    let clip = mvp * Vector4::from_point(target);
    println!("target in NDC: {}", clip.xyz() / clip.w);

    let overlay = Matrix4::ortho(0, 0, 800, 600);
    println!("Matrix \"overlay\"\n{}", overlay);
}
