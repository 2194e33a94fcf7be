//! Default layout applied when nothing has been saved yet

use shared::{ObjectKind, SceneDocument, SceneSettings, TransformRecord, Vec3};

/// Hand-tuned arrangement of every object the office builder creates:
/// (id, position, rotation, scaling).
const DEFAULT_LAYOUT: &[(&str, [f64; 3], [f64; 3], [f64; 3])] = &[
    ("meetingFloor", [0.0, 0.05, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("meetingTable", [0.0, 0.4, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("lightFixture", [0.0, 3.5, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("body_ad", [2.0, 0.9, -2.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("body_manager", [-2.0, 0.9, -2.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("corridor_alex", [8.691656112670898, 0.05000000074505806, 5.044383525848389], [0.0, -1.9676145396320255, 0.0], [0.999999970771519, 1.0, 0.999999970771519]),
    ("lightStrip_alex", [9.510564804077148, 0.05999999865889549, 3.090169906616211], [0.0, -1.9571183165014736, 0.0], [1.0000000293840525, 1.0, 1.0000000293840525]),
    ("officeFloor_alex", [15.692432518870033, 0.05, 5.0987804071866325], [0.0, -1.2566370614359172, 0.0], [1.0, 1.0, 1.0]),
    ("backWall_alex", [18.33655548095703, 1.5, 4.1762189865112305], [0.0, -1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("sideWall_alex_-1", [16.65972328186035, 1.5, 8.166609764099121], [0.0, -1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("sideWall_alex_1", [14.707275390625, 1.5, 2.0066888332366943], [0.0, -1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("window_alex", [18.346826553344727, 1.7000000476837158, 4.564899921417236], [0.0, -1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("desk_alex", [16.643489035165185, 0.375, 5.40779740156158], [0.0, -1.2566370614359172, 0.0], [1.0, 1.0, 1.0]),
    ("monitor_alex", [16.928805990053732, 1.0, 5.500502499874064], [0.0, -1.2566370614359172, 0.0], [1.0, 1.0, 1.0]),
    ("body_alex", [15.216904260722456, 0.9, 4.944271909999159], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("label_Alex Chen", [15.692432518870033, 3.2, 5.0987804071866325], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("corridor_sara", [5.877852439880371, 0.05000000074505806, -8.090169906616211], [0.0, 2.5294087402479697, 0.0], [0.999999987667758, 1.0, 0.999999987667758]),
    ("lightStrip_sara", [4.692692279815674, 0.05999999865889549, -9.800972938537598], [0.0, 2.5450596504917717, 0.0], [0.9999999562824681, 1.0, 0.9999999562824681]),
    ("officeFloor_sara", [9.698456662825809, 0.05, -13.34878040718663], [0.0, -2.5132741228718345, 0.0], [1.0, 1.0, 1.0]),
    ("backWall_sara", [12.460829734802246, 1.5, -15.181846618652344], [0.0, 2.1986720966480684, 0.0], [0.9999999431966434, 1.0, 0.9999999431966434]),
    ("sideWall_sara_-1", [11.00578784942627, 1.5, -10.783385276794434], [0.0, 2.192369020622675, 0.0], [0.9999998422583243, 1.0, 0.9999998422583243]),
    ("sideWall_sara_1", [8.008563995361328, 1.5, -15.659994125366211], [0.0, 2.2099331763615737, 0.0], [1.0000001416730917, 1.0, 1.0000001416730917]),
    ("window_sara", [11.856350898742676, 1.7000000476837158, -15.803747177124023], [0.0, 2.194026027276305, 0.0], [1.0000000957319048, 1.0, 1.0000000957319048]),
    ("desk_sara", [10.286241915118282, 0.375, -14.157797401561577], [0.0, -2.5132741228718345, 0.0], [1.0, 1.0, 1.0]),
    ("monitor_sara", [10.462577490806025, 1.0, -14.400502499874062], [0.0, -2.5132741228718345, 0.0], [1.0, 1.0, 1.0]),
    ("body_sara", [9.404564036679572, 0.9, -12.944271909999157], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("body_al_near_sara", [8.433743643429635, 0.85, -13.649614212750125], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("label_Sara Mueller", [9.698456662825809, 3.2, -13.34878040718663], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("corridor_kevin", [-5.877852439880371, 0.05000000074505806, -8.090169906616211], [0.0, 0.6192429986030956, 0.0], [1.0000002078259447, 1.0, 1.0000002078259447]),
    ("lightStrip_kevin", [-4.518919944763184, 0.05999999865889549, -9.629444122314453], [0.0, 0.6083940721612544, 0.0], [0.9999999249373815, 1.0, 0.9999999249373815]),
    ("officeFloor_kevin", [-9.698456662825805, 0.05, -13.348780407186634], [0.0, -3.7699111843077517, 0.0], [1.0, 1.0, 1.0]),
    ("backWall_kevin", [-8.147476196289062, 1.5, -15.56772232055664], [0.0, 2.5132741338430824, 0.0], [1.000000001758865, 1.0, 1.000000001758865]),
    ("sideWall_kevin_-1", [-12.33226203918457, 1.5, -15.297870635986328], [0.0, 2.5132741338430824, 0.0], [1.000000001758865, 1.0, 1.000000001758865]),
    ("sideWall_kevin_1", [-11.18486213684082, 1.5, -10.926348686218262], [0.0, 0.9596240789648762, 0.0], [0.9999999424430613, 1.0, 0.9999999424430613]),
    ("window_kevin", [-11.678564071655273, 1.7000000476837158, -11.380577087402344], [0.0, 2.5383506854285716, 0.0], [1.000000024536362, 1.0, 1.000000024536362]),
    ("desk_kevin", [-9.786338806152344, 0.375, -14.845865249633789], [0.0, 2.5132741338430824, 0.0], [1.000000001758865, 1.0, 1.000000001758865]),
    ("monitor_kevin", [-9.93441104888916, 1.0, -15.127463340759277], [0.0, 2.5132741338430824, 0.0], [1.000000001758865, 1.0, 1.000000001758865]),
    ("body_kevin", [-9.404564036679568, 0.9, -12.944271909999161], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("body_al_near_kevin", [-10.375384429929506, 0.85, -12.238929607248194], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("label_Kevin Park", [-9.698456662825805, 3.2, -13.348780407186634], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("corridor_julia", [-8.809350967407227, 0.05000000074505806, 5.37846040725708], [0.0, 1.908991934814837, 0.0], [0.9999997925094724, 1.0, 0.9999997925094724]),
    ("lightStrip_julia", [-9.452568054199219, 0.05999999865889549, 3.245972156524658], [0.0, 1.927159514812511, 0.0], [1.000000035350822, 1.0, 1.000000035350822]),
    ("officeFloor_julia", [-15.692432518870035, 0.05, 5.098780407186629], [0.0, -5.026548245743669, 0.0], [1.0, 1.0, 1.0]),
    ("backWall_julia", [-18.251144409179688, 1.5, 4.305235862731934], [0.0, 1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("sideWall_julia_-1", [-14.636935234069824, 1.5, 1.993015170097351], [0.0, 1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("sideWall_julia_1", [-16.721233367919922, 1.5, 8.159476280212402], [0.0, 1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("window_julia", [-18.15756607055664, 1.7000000476837158, 4.283570289611816], [0.0, 1.2566371008426058, 0.0], [1.0000000158832683, 1.0, 1.0000000158832683]),
    ("desk_julia", [-16.64348903516519, 0.375, 5.407797401561576], [0.0, -5.026548245743669, 0.0], [1.0, 1.0, 1.0]),
    ("monitor_julia", [-16.928805990053736, 1.0, 5.50050249987406], [0.0, -5.026548245743669, 0.0], [1.0, 1.0, 1.0]),
    ("body_julia", [-15.216904260722458, 0.9, 4.944271909999156], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("label_Julia Santos", [-15.692432518870035, 3.2, 5.098780407186629], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
    ("ground", [0.0, -0.01, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
];

/// The baked-in layout as a scene document.
///
/// Every record is tagged `box`, as the layout editor exported it; the kind is
/// descriptive only and never consulted when applying.
pub fn default_layout() -> SceneDocument {
    let objects = DEFAULT_LAYOUT
        .iter()
        .map(|&(id, position, rotation, scale)| {
            TransformRecord::new(id, ObjectKind::Box)
                .with_position(Vec3::from(position))
                .with_rotation(Vec3::from(rotation))
                .with_scale(Vec3::from(scale))
        })
        .collect();
    SceneDocument::new(objects, SceneSettings::default())
}

/// Ids covered by the default layout, in layout order
pub fn default_layout_ids() -> impl Iterator<Item = &'static str> {
    DEFAULT_LAYOUT.iter().map(|&(id, ..)| id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let doc = default_layout();
        assert_eq!(doc.version, shared::SCENE_FORMAT_VERSION);
        assert_eq!(doc.objects.len(), 52);
        assert!(doc.validate().is_ok());
        assert!(doc.duplicate_ids().is_empty());
    }

    #[test]
    fn test_default_layout_ids_unique() {
        let ids: HashSet<&str> = default_layout_ids().collect();
        assert_eq!(ids.len(), DEFAULT_LAYOUT.len());
        assert!(ids.contains("label_Alex Chen"));
        assert!(ids.contains("body_al_near_sara"));
        assert!(ids.contains("ground"));
    }

    #[test]
    fn test_default_layout_values() {
        let doc = default_layout();
        let table = doc.find("meetingTable").unwrap();
        assert_eq!(table.position, Vec3::new(0.0, 0.4, 0.0));
        assert_eq!(table.scale, Vec3::ONE);
        assert_eq!(table.name, "meetingTable");

        let corridor = doc.find("corridor_alex").unwrap();
        assert!((corridor.rotation.y - -1.9676145396320255).abs() < 1e-15);
    }
}
