extern crate generic_easing;

use generic_easing::Bezier;

fn main() {

    let bezier = Bezier::normalized(&[0.0, 1.2, -0.2, 1.0]);

    let number_of_steps = 40;
    let t_vector: Vec<f64> = (0..=number_of_steps)
        .map(|i| i as f64 / number_of_steps as f64)
        .collect();

    let result = bezier.batch_evaluate(&t_vector);

    println!("t;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.3}", t_vector[i], result[i]);
    }
}
