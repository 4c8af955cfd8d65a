use egui::Color32;
use egui_plot::{GridMark, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints};
use rl_session::display::{
    TEMP_AXIS_MAX_C, TEMP_GRID_STEP_C, TIME_TICK_STEP_MIN, temperature_ticks, time_ticks,
};
use rl_session::{Reading, ReferenceCurve};

/// Reference curves dashed, live trace solid red. The time axis always spans
/// `[0, watermark]` and the temperature axis `[0, 250]`.
pub fn show(ui: &mut egui::Ui, curves: &[ReferenceCurve], samples: &[Reading], watermark: f64) {
    let mut lines = Vec::with_capacity(curves.len() + 1);
    for curve in curves {
        let points: PlotPoints = curve
            .points
            .iter()
            .map(|p| [p.time_min, p.temp_c])
            .collect();
        lines.push(
            Line::new(points)
                .name(&curve.longname)
                .style(LineStyle::dashed_loose())
                .width(1.5),
        );
    }

    let live: PlotPoints = samples.iter().map(|r| [r.time_min, r.temp_c]).collect();
    lines.push(
        Line::new(live)
            .name("Live temperature")
            .color(Color32::RED)
            .width(2.0),
    );

    Plot::new("roast_plot")
        .legend(Legend::default())
        .x_axis_label("Time (min)")
        .y_axis_label("Temperature (°C)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_grid_spacer(move |_input| {
            time_ticks(watermark)
                .into_iter()
                .map(|value| GridMark {
                    value,
                    step_size: TIME_TICK_STEP_MIN,
                })
                .collect()
        })
        .y_grid_spacer(|_input| {
            temperature_ticks()
                .into_iter()
                .map(|value| GridMark {
                    value,
                    step_size: TEMP_GRID_STEP_C,
                })
                .collect()
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [0.0, 0.0],
                [watermark, TEMP_AXIS_MAX_C],
            ));
            for line in lines {
                plot_ui.line(line);
            }
        });
}
