extern crate generic_easing;

use generic_easing::CurveFamily;

fn main() {

    let exponent = 2.5;
    let number_of_steps = 20;

    print!("t");
    for family in CurveFamily::ALL {
        print!(";{}", family);
    }
    println!();

    for i in 0..=number_of_steps {
        let t = i as f64 / number_of_steps as f64;
        print!("{:.2}", t);
        for family in CurveFamily::ALL {
            print!(";{:.3}", family.evaluate_real(t, exponent));
        }
        println!();
    }
}
