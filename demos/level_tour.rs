use grid_pursuit::{Algorithm, Level};

// Decodes a level from text and runs each of the four algorithms from the
// agent to the destination marker, with and without diagonal movement.
fn main() {
    let level = Level::parse(concat!(
        "##########\n",
        "#O     # #\n",
        "# ### ## #\n",
        "#   #    #\n",
        "# # #### #\n",
        "# #    # #\n",
        "# ## # # #\n",
        "#    #  X#\n",
        "##########",
    ))
    .unwrap();
    let area = level.to_area().unwrap();
    let agent = level.agent().unwrap();
    let destination = level.destination().unwrap();
    println!("{area}");
    for algorithm in Algorithm::ALL {
        for allow_diagonals in [false, true] {
            let route = algorithm.find_path(&area, agent, destination, allow_diagonals);
            let diag_str = if allow_diagonals { "8-grid" } else { "4-grid" };
            println!(
                "{} ({diag_str}): {} interior cells",
                algorithm.label(),
                route.len()
            );
        }
    }
}
