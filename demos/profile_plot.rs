use std::error::Error;

use gnuplot::*;
use motion_profile::{Cubic, Linear, Position, Velocity};

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up the profiles
    // -----------------------
    // Cubic: rest-to-rest move from 0 to 50 over 2 s. Halfway through the
    // target changes and the profile is extended from wherever it stands.
    let mut cubic = Cubic::<f64>::new();
    cubic.set_rest((0.0, 2.0), (0.0, 50.0));

    // Linear: same start and end points, no velocity constraint.
    let mut linear = Linear::<f64>::new();
    linear.set((0.0, 2.0), (0.0, 50.0));

    let retarget_time = 1.0;
    let total_time = 3.0;

    // -------------------------
    // 2. Sample like a control loop would
    // -------------------------
    let sampling_rate = 1000.0; // samples per second
    let num_points = (sampling_rate * total_time) as usize + 1;

    let mut time_axis = Vec::with_capacity(num_points);
    let mut cubic_pos = Vec::with_capacity(num_points);
    let mut cubic_vel = Vec::with_capacity(num_points);
    let mut linear_pos = Vec::with_capacity(num_points);

    let mut retargeted = false;
    for i in 0..num_points {
        let t = i as f64 / sampling_rate;
        if !retargeted && t >= retarget_time {
            cubic.q_at(t);
            cubic.extend_rest(total_time, 20.0);
            linear.q_at(t);
            linear.extend(total_time, 20.0);
            retargeted = true;
        }

        time_axis.push(t);
        cubic_pos.push(cubic.q_at(t));
        cubic_vel.push(cubic.v());
        linear_pos.push(linear.q_at(t));
    }

    // Both profiles must land on the new target
    let final_error = (cubic.q() - 20.0).abs().max((linear.q() - 20.0).abs());
    if final_error > 1e-9 {
        return Err(format!("final position is off by {final_error}").into());
    }

    // --------------
    // 3. Plot data
    // --------------
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title("Linear and cubic profiles vs. Time", &[]);
        axes.set_x_label("Time (s)", &[]);
        axes.set_y_label("Position / Velocity", &[]);
        axes.lines(&time_axis, &cubic_pos, &[Color("blue"), Caption("Cubic position")]);
        axes.lines(&time_axis, &cubic_vel, &[Color("red"), Caption("Cubic velocity")]);
        axes.lines(&time_axis, &linear_pos, &[Color("green"), Caption("Linear position")]);
    }

    // Needs gnuplot installed
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;

    println!("Plot generated. Total time: {:.3} seconds.", total_time);
    Ok(())
}
