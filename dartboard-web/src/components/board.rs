//! SVG dartboard: draws the rings and sectors and turns clicks into board points.
use dartboard_game::constants::{
    BULL_RADIUS, CANVAS_CENTER, CANVAS_SIZE, DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS,
    NUMBER_RING_RADIUS, OUTER_BULL_RADIUS, SECTOR_COUNT, SPOKE_OUTER_RADIUS, SURROUND_RADIUS,
    TRIPLE_INNER_RADIUS, TRIPLE_OUTER_RADIUS,
};
use dartboard_game::geometry::{sector_bounds, sector_center_angle};
use dartboard_game::{Marker, Point, sector_number};
use yew::prelude::*;

const SURROUND_FILL: &str = "#111111";
const DARK_FILL: &str = "#1b1b1b";
const LIGHT_FILL: &str = "#f3e4c2";
const RED_FILL: &str = "#d0312d";
const GREEN_FILL: &str = "#1f7a3a";
const WIRE_STROKE: &str = "#b8b8b8";
const MARKER_RADIUS: f64 = 5.0;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Darts of the visit in progress.
    #[prop_or_default]
    pub markers: Vec<Marker>,
    /// Ignore clicks while a checkout or bust is on display.
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_throw: Callback<Point>,
}

/// Map a client-space click onto the board, given the drawn element's box
/// `(left, top, width, height)`.
#[must_use]
pub fn click_point(client: (f64, f64), rect: (f64, f64, f64, f64)) -> Option<Point> {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let canvas_x = (client.0 - left) * CANVAS_SIZE / width;
    let canvas_y = (client.1 - top) * CANVAS_SIZE / height;
    Some(Point::from_canvas(canvas_x, canvas_y))
}

fn canvas(point: Point) -> (f64, f64) {
    point.to_canvas()
}

/// SVG path for the ring segment of sector `index` between two radii.
#[must_use]
pub fn annular_sector_path(index: usize, inner: f64, outer: f64) -> String {
    let (start, end) = sector_bounds(index);
    let (ox1, oy1) = canvas(Point::polar(start, outer));
    let (ox2, oy2) = canvas(Point::polar(end, outer));
    let (ix2, iy2) = canvas(Point::polar(end, inner));
    let (ix1, iy1) = canvas(Point::polar(start, inner));
    format!(
        "M {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 0 1 {ox2:.2} {oy2:.2} \
         L {ix2:.2} {iy2:.2} A {inner:.2} {inner:.2} 0 0 0 {ix1:.2} {iy1:.2} Z"
    )
}

fn sector_segments(index: usize) -> Html {
    let even = index % 2 == 0;
    let single = if even { DARK_FILL } else { LIGHT_FILL };
    let multiple = if even { RED_FILL } else { GREEN_FILL };
    let rings = [
        (OUTER_BULL_RADIUS, TRIPLE_INNER_RADIUS, single),
        (TRIPLE_INNER_RADIUS, TRIPLE_OUTER_RADIUS, multiple),
        (TRIPLE_OUTER_RADIUS, DOUBLE_INNER_RADIUS, single),
        (DOUBLE_INNER_RADIUS, DOUBLE_OUTER_RADIUS, multiple),
    ];
    html! {
        <g class="sector" data-sector={sector_number(index).to_string()}>
            { for rings.iter().map(|&(inner, outer, fill)| html! {
                <path d={annular_sector_path(index, inner, outer)} fill={fill} />
            }) }
        </g>
    }
}

fn spoke(index: usize) -> Html {
    let (start, _) = sector_bounds(index);
    let (x1, y1) = canvas(Point::polar(start, OUTER_BULL_RADIUS));
    let (x2, y2) = canvas(Point::polar(start, SPOKE_OUTER_RADIUS));
    html! {
        <line x1={format!("{x1:.2}")} y1={format!("{y1:.2}")}
              x2={format!("{x2:.2}")} y2={format!("{y2:.2}")}
              stroke={WIRE_STROKE} stroke-width="0.6" />
    }
}

fn number_label(index: usize) -> Html {
    let (x, y) = canvas(Point::polar(sector_center_angle(index), NUMBER_RING_RADIUS));
    html! {
        <text class="sector-number" x={format!("{x:.2}")} y={format!("{y:.2}")}
              text-anchor="middle" dominant-baseline="central" fill="#ffffff">
            { sector_number(index).to_string() }
        </text>
    }
}

fn marker(marker: &Marker) -> Html {
    let (x, y) = canvas(marker.position);
    let class = if marker.current {
        "marker marker--current"
    } else {
        "marker"
    };
    html! {
        <circle class={class} cx={format!("{x:.2}")} cy={format!("{y:.2}")}
                r={MARKER_RADIUS.to_string()} />
    }
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let onclick = {
        let on_throw = props.on_throw.clone();
        let disabled = props.disabled;
        Callback::from(move |e: MouseEvent| {
            if disabled {
                return;
            }
            let client = (f64::from(e.client_x()), f64::from(e.client_y()));
            if let Some(point) =
                crate::dom::current_target_rect(&e).and_then(|rect| click_point(client, rect))
            {
                on_throw.emit(point);
            }
        })
    };

    let center = format!("{CANVAS_CENTER}");
    let class = classes!("board", props.disabled.then_some("board--disabled"));
    html! {
        <svg class={class} viewBox={format!("0 0 {CANVAS_SIZE} {CANVAS_SIZE}")}
             role="img" aria-label="Dartboard" {onclick}>
            <circle cx={center.clone()} cy={center.clone()} r={SURROUND_RADIUS.to_string()}
                    fill={SURROUND_FILL} />
            { for (0..SECTOR_COUNT).map(sector_segments) }
            { for (0..SECTOR_COUNT).map(spoke) }
            <circle cx={center.clone()} cy={center.clone()} r={OUTER_BULL_RADIUS.to_string()}
                    fill={GREEN_FILL} />
            <circle cx={center.clone()} cy={center} r={BULL_RADIUS.to_string()} fill={RED_FILL} />
            { for (0..SECTOR_COUNT).map(number_label) }
            { for props.markers.iter().map(marker) }
        </svg>
    }
}
