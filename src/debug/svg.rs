use std::{fmt, io, path};

use num_traits::real::Real;

use crate::{Coords, Polygon, Triangle, debug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum SvgOutputLevel {
    None,
    ResultOnly,
    AllStages,
}

pub(crate) struct SvgOutput<'a> {
    pub context: &'a SvgContext,
    content: String,
}

impl<'a> SvgOutput<'a> {
    pub fn new(context: &'a SvgContext) -> Self {
        Self {
            context,
            content: String::new(),
        }
    }

    pub fn append_element<E: SvgElement>(&mut self, element: &E) -> fmt::Result {
        element.write_svg(self)
    }

    pub fn save<P: AsRef<path::Path>>(self, file_name: P) -> io::Result<()> {
        use std::io::Write;

        let path = self.context.output_path.join(file_name);
        let f = std::fs::File::create(path)?;
        let mut w = io::BufWriter::new(&f);
        
        writeln!(w, "<svg viewBox=\"{}, {}, {}, {}\" xmlns=\"http://www.w3.org/2000/svg\">", self.context.view_x_min, self.context.view_y_min, self.context.view_w(), self.context.view_h())?;
        writeln!(w, "{}", self.content)?;
        writeln!(w, "</svg>")?;
        Ok(())
    }
}

impl<'a> fmt::Write for SvgOutput<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.write_str(s)
    }
}

pub(crate) struct SvgContext {
    pub output_path: path::PathBuf,
    pub output_level: SvgOutputLevel,
    pub view_x_min: f32,
    pub view_x_max: f32,
    pub view_y_min: f32,
    pub view_y_max: f32,
    pub show_labels: bool,
}

impl SvgContext {
    /// Reads the output settings from the environment, framing the view around `points`
    pub fn from_env<C: Real>(points: &[Coords<C>]) -> Option<Self> {
        let output_path = debug::env::svg_output_path()?;
        let output_level = debug::env::svg_output_level();
        let show_labels = debug::env::svg_labels();

        if output_level == SvgOutputLevel::None {
            return None;
        }

        let mut view_x_min = f32::MAX;
        let mut view_x_max = f32::MIN;
        let mut view_y_min = f32::MAX;
        let mut view_y_max = f32::MIN;
        for p in points {
            let [x, y] = to_f32(*p);
            view_x_min = view_x_min.min(x);
            view_x_max = view_x_max.max(x);
            view_y_min = view_y_min.min(y);
            view_y_max = view_y_max.max(y);
        }

        let w = view_x_max - view_x_min;
        let h = view_y_max - view_y_min;
        let margin_scale = 0.1;
        view_x_min -= w * margin_scale;
        view_x_max += w * margin_scale;
        view_y_min -= h * margin_scale;
        view_y_max += h * margin_scale;

        Some(Self {
            output_path,
            output_level,
            view_x_min,
            view_x_max,
            view_y_min,
            view_y_max,
            show_labels,
        })
    }

    pub fn view_w(&self) -> f32 { self.view_x_max - self.view_x_min }
    pub fn view_h(&self) -> f32 { self.view_y_max - self.view_y_min }

    pub fn view_min_size(&self) -> f32 { self.view_w().min(self.view_h()) }

    pub fn percent(&self, p: f32) -> f32 { self.view_min_size() * p / 100.0 }
}

/// Writes one numbered svg file per pipeline stage
pub(crate) struct SvgRecorder {
    context: Option<SvgContext>,
    current_step: u32,
}

impl SvgRecorder {
    pub fn new<C: Real>(points: &[Coords<C>]) -> Self {
        Self {
            context: SvgContext::from_env(points),
            current_step: 0,
        }
    }

    pub fn record<E: SvgElement>(&mut self, stage: &str, elements: &[E], level: SvgOutputLevel) {
        if let Some(svg_context) = &self.context {
            if svg_context.output_level >= level {
                let mut svg = SvgOutput::new(svg_context);
                for element in elements {
                    if svg.append_element(element).is_err() {
                        return;
                    }
                }
                if let Err(e) = svg.save(format!("{:03}_{}.svg", self.current_step, stage)) {
                    log::warn!("Failed to write svg for stage {}: {}", stage, e);
                }
                self.current_step += 1;
            }
        }
    }
}

pub(crate) trait SvgElement {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result;
}

impl<C: Real> SvgElement for Polygon<C> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let points: Vec<[f32; 2]> = self.vertices().iter().map(|&p| to_f32(p)).collect();
        writeln!(svg_output, "{}",
            polygon(&points)
                .fill(Fill::Color(rgb(120, 180, 255)))
                .opacity(0.5)
                .stroke(Stroke::Color(black(), svg_output.context.percent(0.3)))
        )?;

        let r = svg_output.context.percent(0.5);
        for (i, &[x, y]) in points.iter().enumerate() {
            writeln!(svg_output, "{}", circle(x, y, r).fill(Fill::Color(green())))?;
            if svg_output.context.show_labels {
                let gap = svg_output.context.percent(1.0);
                writeln!(svg_output, "{}",
                    text(x - gap, y, i.to_string())
                        .color(black())
                        .align(Align::Right)
                        .size(svg_output.context.percent(2.0))
                )?;
            }
        }
        Ok(())
    }
}

impl<C: Real> SvgElement for Triangle<C> {
    fn write_svg(&self, svg_output: &mut SvgOutput<'_>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let points: Vec<[f32; 2]> = self.vertices().iter().map(|&p| to_f32(p)).collect();
        writeln!(svg_output, "{}",
            polygon(&points)
                .fill(Fill::None)
                .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.2)))
        )?;
        Ok(())
    }
}

fn to_f32<C: Real>(p: Coords<C>) -> [f32; 2] {
    [p.x().to_f32().unwrap_or(0.0), p.y().to_f32().unwrap_or(0.0)]
}

// svg_fmt is missing a function for Circle
pub(crate) fn circle(x: f32, y: f32, r: f32) -> svg_fmt::Circle {
    svg_fmt::Circle {
        x,
        y,
        radius: r,
        style: svg_fmt::Style::default(),
    }
}
