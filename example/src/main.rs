use densemat::{mat, scale, MResult, Matrix};

fn main() -> MResult<()> {
    env_logger::init();

    let a: Matrix<i32> = mat![[1, 2], [3, 4]];
    let b = mat![[5, 6], [7, 8]];

    log::info!("a: {:?}", a);
    (&a * &b)?.print();
    a.transpose().print();
    println!("trace(a) = {}\n", a.trace());

    let mut f = Matrix::<f64>::from_elem(2, 2, 5.0);
    f += 3.0;
    f.div_scalar_assign(4.0);
    println!("{:.3}\n", f);
    scale(0.5, &f).print();

    // both fail and leave `a` as it was; RUST_LOG=warn shows the diagnostics
    if let Err(e) = a.matmul(&Matrix::zeros(3, 2)) {
        println!("error: {}", e);
    }
    let mut c = a.clone();
    if let Err(e) = c.add_matrix_assign(&Matrix::identity(3)) {
        println!("error: {}", e);
    }
    assert_eq!(c, a);
    Ok(())
}
