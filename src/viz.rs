//! Segment map rendering using Plotters

use anyhow::Result;
use plotters::prelude::*;

use crate::model::CustomerFeatures;
use crate::segments::SEGMENT_PROFILES;

/// Color per segment, indexed by cluster id
static SEGMENT_COLORS: [RGBColor; 5] = [RED, BLUE, GREEN, YELLOW, MAGENTA];

/// Render the five segment centroids and the predicted customer point in
/// raw (income, spending score) space.
///
/// # Arguments
/// * `customer` - The raw input values, drawn as a highlighted point
/// * `cluster` - The assigned cluster id, used to color the customer point
/// * `output_path` - Path to save the PNG plot
pub fn render_segment_map(
    customer: &CustomerFeatures,
    cluster: usize,
    output_path: &str,
) -> Result<()> {
    // Keep the full catalog visible and pad so an out-of-range customer
    // still lands inside the axes.
    let x_min = 0.0_f64.min(customer.income - 10.0);
    let x_max = 150.0_f64.max(customer.income + 10.0);
    let y_min = 0.0_f64.min(customer.spending_score - 10.0);
    let y_max = 110.0_f64.max(customer.spending_score + 10.0);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Customer Segments: Income vs Spending Score", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Annual Income (k$)")
        .y_desc("Spending Score")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    // Segment centroids as labeled squares
    for (segment_id, profile) in SEGMENT_PROFILES.iter().enumerate() {
        let color = &SEGMENT_COLORS[segment_id % SEGMENT_COLORS.len()];
        let (cx, cy) = (profile.centroid_income, profile.centroid_spend);

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(cx - 2.0, cy - 2.0), (cx + 2.0, cy + 2.0)],
                color.filled(),
            )))?
            .label(profile.name)
            .legend(move |(x, y)| Rectangle::new([(x, y), (x + 10, y + 10)], color.filled()));
    }

    // The predicted customer, colored by the assigned segment with a
    // contrasting outline
    let customer_color = &SEGMENT_COLORS[cluster % SEGMENT_COLORS.len()];
    let point = (customer.income, customer.spending_score);

    chart
        .draw_series(std::iter::once(Circle::new(point, 6, customer_color.filled())))?
        .label("Customer")
        .legend(move |(x, y)| Circle::new((x + 5, y + 5), 5, customer_color.filled()));
    chart.draw_series(std::iter::once(Circle::new(point, 6, BLACK.stroke_width(2))))?;

    chart.configure_series_labels().draw()?;

    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_render_segment_map() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("segment_map.png");
        let output_str = output_path.to_str().unwrap();

        let customer = CustomerFeatures {
            income: 87.0,
            spending_score: 82.0,
        };

        let result = render_segment_map(&customer, 1, output_str);
        assert!(result.is_ok());
        assert!(Path::new(output_str).exists());
    }

    #[test]
    fn test_render_out_of_range_customer() {
        let temp_dir = tempdir().unwrap();
        let output_path = temp_dir.path().join("outlier_map.png");
        let output_str = output_path.to_str().unwrap();

        let customer = CustomerFeatures {
            income: 250.0,
            spending_score: -20.0,
        };

        let result = render_segment_map(&customer, 4, output_str);
        assert!(result.is_ok());
        assert!(Path::new(output_str).exists());
    }
}
