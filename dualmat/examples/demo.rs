//! Builds a few matrices, multiplies a fixed one by a dynamic one and
//! resizes the dynamic one, printing every step.
//!
//! Run with `cargo run --example demo --features cli -- --height 5 --width 5`.

use clap::Parser;
use dualmat::{DynamicMatrix, FixedMatrix, Matrix};

type Mat33<T> = FixedMatrix<T, 3, 3>;

#[derive(Parser)]
#[command(author, version, about = "Print fixed and dynamic matrix arithmetic", long_about = None)]
struct Cli {
    /// Height to resize the dynamic matrix to
    #[arg(long, default_value_t = 5)]
    height: usize,

    /// Width to resize the dynamic matrix to
    #[arg(long, default_value_t = 5)]
    width: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mat1 = Mat33::from_slice(&[
        1, 2, 3, //
        4, 5, 6, //
        7, 8, 9,
    ]);
    println!("mat1:\n{mat1}");

    let mat2 = Mat33::from_slice(&[
        3, 2, 1, //
        6, 5, 4, //
        9, 8, 7,
    ]);
    println!("mat2:\n{mat2}");

    let mut mat3 = DynamicMatrix::new(3, 3);
    mat3.try_assign(&[
        1, 2, 3, //
        4, 5, 6, //
        7, 8, 9,
    ])?;
    println!("mat3:\n{mat3}");

    // Fixed times dynamic is allowed whenever the inner dimensions agree
    let product = &mat1 * &mat3;
    println!("mat1 * mat3:\n{product}");

    let fixed_product = mat1 * mat2;
    println!("mat1 * mat2:\n{fixed_product}");

    mat3.try_resize(cli.height, cli.width)?;
    println!(
        "mat3 resized to {}x{}:\n{}",
        mat3.height(),
        mat3.width(),
        mat3.render()
    );

    Ok(())
}
