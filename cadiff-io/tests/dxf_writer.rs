use cadiff_core::{
    document::{ColorIndex, Document, Entity, EntityData, InsertPlacement, OtherEntity},
    geometry::{Point2, Point3},
};
use cadiff_io::DxfFacade;

/// 将 DXF 文本拆成 (组码, 值) 列表，便于断言。
fn pairs(text: &str) -> Vec<(i32, String)> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .chunks(2)
        .map(|chunk| {
            let code = chunk[0].trim().parse::<i32>().expect("组码应为整数");
            (code, chunk.get(1).copied().unwrap_or_default().to_string())
        })
        .collect()
}

fn values_after<'a>(pairs: &'a [(i32, String)], marker: &str) -> &'a [(i32, String)] {
    let start = pairs
        .iter()
        .position(|(code, value)| *code == 0 && value == marker)
        .unwrap_or_else(|| panic!("缺少 {marker}"));
    &pairs[start..]
}

#[test]
fn writes_sections_in_r12_order() {
    let mut doc = Document::new();
    doc.add_layer("ADDED", ColorIndex::GREEN);
    doc.add_line(Point3::ORIGIN, Point3::new(1.0, 2.0, 0.0), "ADDED");

    let text = DxfFacade::new().render(&doc);
    let pairs = pairs(&text);

    let sections: Vec<&str> = pairs
        .windows(2)
        .filter(|w| w[0].0 == 0 && w[0].1 == "SECTION")
        .map(|w| w[1].1.as_str())
        .collect();
    assert_eq!(sections, vec!["HEADER", "TABLES", "BLOCKS", "ENTITIES"]);
    assert!(pairs.contains(&(1, "AC1009".to_string())));
    assert_eq!(pairs.last(), Some(&(0, "EOF".to_string())));

    let layer = values_after(&pairs, "LAYER");
    let added = layer
        .iter()
        .position(|p| p == &(2, "ADDED".to_string()))
        .expect("图层表中应有 ADDED");
    assert!(layer[added..].contains(&(62, "3".to_string())));

    let line = values_after(&pairs, "LINE");
    assert_eq!(line[1], (8, "ADDED".to_string()));
    assert!(line.contains(&(11, "1.0".to_string())));
    assert!(line.contains(&(21, "2.0".to_string())));
}

#[test]
fn polyline_and_insert_use_sequence_end_markers() {
    let mut doc = Document::new();
    doc.define_block("B1");
    doc.add_polyline(
        [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)],
        true,
        "0",
    );
    let insert = doc.add_insert(InsertPlacement::new("B1", Point3::new(5.0, 5.0, 0.0)), "0");
    doc.attach_attrib(insert, Entity::attrib("ID", "7", Point3::new(5.0, 6.0, 0.0), 2.5))
        .expect("附加属性失败");

    let pairs = pairs(&DxfFacade::new().render(&doc));

    let polyline = values_after(&pairs, "POLYLINE");
    assert!(polyline.contains(&(70, "1".to_string())));
    let vertices = polyline
        .iter()
        .take_while(|(code, value)| !(*code == 0 && value == "SEQEND"))
        .filter(|(code, value)| *code == 0 && value == "VERTEX")
        .count();
    assert_eq!(vertices, 3);

    let insert = values_after(&pairs, "INSERT");
    assert!(insert.contains(&(66, "1".to_string())));
    assert!(insert.contains(&(2, "B1".to_string())));
    let attrib = values_after(insert, "ATTRIB");
    assert!(attrib.contains(&(2, "ID".to_string())));
    assert!(attrib.contains(&(1, "7".to_string())));
    assert!(attrib.iter().any(|(c, v)| *c == 0 && v == "SEQEND"));
}

#[test]
fn unmodelled_entities_are_skipped() {
    let mut doc = Document::new();
    doc.add_entity(Entity::new(EntityData::Other(OtherEntity::new("HATCH"))));
    let text = DxfFacade::new().render(&doc);
    assert!(!text.contains("HATCH"));
}

#[test]
fn mtext_is_written_as_r12_text() {
    let mut doc = Document::new();
    let mut note = Entity::mtext(Point3::new(1.0, 2.0, 0.0), "first\nsecond", 2.5);
    if let EntityData::MText(text) = &mut note.data {
        text.rotation = 90.0;
    }
    doc.add_entity(note);

    let text = DxfFacade::new().render(&doc);
    assert!(text.contains("AC1009"));
    assert!(!text.contains("MTEXT"), "R12 文件不应出现 MTEXT");

    let pairs = pairs(&text);
    let record = values_after(&pairs, "TEXT");
    let end = record[1..]
        .iter()
        .position(|(code, _)| *code == 0)
        .map_or(record.len(), |i| i + 1);
    let record = &record[..end];
    assert!(record.contains(&(1, "first second".to_string())));
    // TEXT 的旋转角以度为单位
    assert!(record.contains(&(50, "90.0".to_string())));
}

#[test]
fn continuous_linetype_is_defined_before_layers() {
    let mut doc = Document::new();
    doc.add_layer("ADDED", ColorIndex::GREEN);
    let pairs = pairs(&DxfFacade::new().render(&doc));

    let ltype = pairs
        .iter()
        .position(|p| p == &(2, "LTYPE".to_string()))
        .expect("应有 LTYPE 表");
    let continuous = pairs
        .iter()
        .position(|p| p == &(2, "CONTINUOUS".to_string()))
        .expect("应定义 CONTINUOUS");
    let layer_table = pairs
        .iter()
        .position(|p| p == &(2, "LAYER".to_string()))
        .expect("应有 LAYER 表");
    assert!(ltype < continuous && continuous < layer_table);
    assert!(pairs.contains(&(6, "CONTINUOUS".to_string())));
}
