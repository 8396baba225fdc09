//! Built-in demo graph of fifteen Dehradun landmarks joined by twenty-four
//! roads. Weights are in meters.

use crate::graph::{Coordinates, Node, RiskGraph};

/// (id, name, lat, lng, is_safe, danger_level)
const LOCATIONS: &[(&str, &str, f64, f64, bool, u8)] = &[
    ("clockTower", "Clock Tower", 30.3252, 78.0422, false, 6),
    ("doonHospital", "Doon Hospital", 30.3219, 78.0322, true, 0),
    ("railwayStation", "Dehradun Railway Station", 30.3185, 78.0327, true, 1),
    ("forestResearchInstitute", "Forest Research Institute", 30.3418, 77.9994, true, 0),
    ("pacificMall", "Pacific Mall", 30.3164, 78.0321, false, 5),
    ("rajpurRoad", "Rajpur Road", 30.3279, 78.0451, false, 4),
    ("paltan", "Paltan Bazaar", 30.3248, 78.0436, false, 7),
    ("itPark", "IT Park", 30.3385, 78.0068, true, 0),
    ("fireStation", "Fire Station", 30.3234, 78.0359, true, 0),
    ("policeHQ", "Police Headquarters", 30.3247, 78.0389, true, 1),
    ("isbt", "ISBT Dehradun", 30.2877, 78.0318, true, 1),
    ("ghantaGhar", "Ghanta Ghar", 30.3252, 78.0422, false, 3),
    ("doonUniversity", "Doon University", 30.3184, 78.0463, true, 0),
    ("maxHospital", "Max Hospital", 30.3382, 78.0685, true, 0),
    ("parade", "Parade Ground", 30.3241, 78.0398, true, 1),
];

/// (from, to, weight, danger_level)
const ROADS: &[(&str, &str, f64, u8)] = &[
    ("clockTower", "paltan", 150.0, 5),
    ("clockTower", "policeHQ", 100.0, 3),
    ("doonHospital", "clockTower", 160.0, 4),
    ("doonHospital", "paltan", 120.0, 5),
    ("railwayStation", "pacificMall", 130.0, 3),
    ("railwayStation", "isbt", 200.0, 2),
    ("forestResearchInstitute", "itPark", 180.0, 1),
    ("pacificMall", "rajpurRoad", 140.0, 4),
    ("rajpurRoad", "maxHospital", 160.0, 3),
    ("paltan", "ghantaGhar", 170.0, 4),
    ("itPark", "fireStation", 120.0, 1),
    ("fireStation", "doonUniversity", 150.0, 2),
    ("policeHQ", "parade", 140.0, 2),
    ("isbt", "railwayStation", 160.0, 3),
    ("ghantaGhar", "parade", 110.0, 3),
    ("doonUniversity", "maxHospital", 180.0, 2),
    ("maxHospital", "policeHQ", 200.0, 3),
    ("parade", "doonHospital", 130.0, 2),
    ("clockTower", "ghantaGhar", 100.0, 4),
    ("pacificMall", "doonUniversity", 160.0, 3),
    ("fireStation", "parade", 140.0, 2),
    ("itPark", "maxHospital", 190.0, 2),
    ("rajpurRoad", "policeHQ", 170.0, 3),
    ("isbt", "pacificMall", 150.0, 3),
];

/// Build the demo city graph.
pub fn demo_city() -> RiskGraph {
    let mut graph = RiskGraph::new();
    for &(id, name, lat, lng, is_safe, danger_level) in LOCATIONS {
        graph
            .add_node(Node::new(id, name, Coordinates::new(lat, lng), is_safe, danger_level))
            .expect("demo locations are valid");
    }
    for &(from, to, weight, danger_level) in ROADS {
        graph
            .add_edge(from, to, weight, danger_level)
            .expect("demo roads reference demo locations");
    }
    graph
}
