use linecast::cast::{ScalarKind, TypeSpec};
use linecast::device::{InputDevice, Kit};

fn main() {
    println!("----------------------------------------------------");
    println!("██      ██ ███    ██ ███████  ██████  █████  ███████ ████████");
    println!("██      ██ ████   ██ ██      ██      ██   ██ ██         ██   ");
    println!("██      ██ ██ ██  ██ █████   ██      ███████ ███████    ██   ");
    println!("██      ██ ██  ██ ██ ██      ██      ██   ██      ██    ██   ");
    println!("███████ ██ ██   ████ ███████  ██████ ██   ██ ███████    ██   ");
    println!("            TYPED CONSOLE INPUT        VERSION: 0.1.0");
    println!("----------------------------------------------------");

    let mut device = InputDevice::new(true, false, Some(6), Kit::default());

    println!("Stream size     : {:?}", device.stream_size());
    println!("Show warnings   : {}", device.warnings());
    println!("Raise errors    : {}", device.raise_errors());
    println!("Device kit      : {:?}", device.kit());
    println!();

    let specs = [
        TypeSpec::Scalar(ScalarKind::I64),
        TypeSpec::Iterable(vec![ScalarKind::Str, ScalarKind::I64, ScalarKind::F64]),
        TypeSpec::Iterable(vec![ScalarKind::I64]),
        TypeSpec::Scalar(ScalarKind::I64),
        TypeSpec::Scalar(ScalarKind::Str),
        TypeSpec::Scalar(ScalarKind::F64),
    ];

    println!("Enter six values separated by spaces, e.g.:");
    println!("  3 (a,2,1.5) [7,8,9] 42 hello 2.5");
    match device.read_many(&specs, Some("> "), None, None, None) {
        Ok(Some(values)) => {
            for (i, value) in values.iter().enumerate() {
                println!("  [{}] {}", i, value);
            }
        }
        Ok(None) => eprintln!("No result."),
        Err(e) => eprintln!("{}", e),
    }

    match device.read_one(
        Some("And one number to finish: "),
        ScalarKind::I64,
        false,
        Some(-1),
    ) {
        Ok(value) => println!("Got: {}", value),
        Err(e) => eprintln!("{}", e),
    }
}
