use hormodular::gait::{decode_genotype, GaitTable, GenotypeDecoder};
use hormodular::results::{best_individual, decode_population, load_individuals};
use hormodular::HormodularError;

const MILESTONE: &str = "<Milestone>
<Individual size=\"1\" gen=\"0\">
\t<FitnessMax value=\"0.5\"/>
\t<FloatingPoint size=\"9\">0\t0\t0\t0\t0\t0\t0\t0\t0</FloatingPoint>
</Individual>
<Individual size=\"1\" gen=\"4\">
\t<FitnessMax value=\"2.75\"/>
\t<FloatingPoint size=\"9\">1\t1\t1\t-1\t-1\t-1\t0.5\t-0.5\t0</FloatingPoint>
</Individual>
</Milestone>
";

#[test]
fn test_best_individual_to_gait_table() {
    let individuals = load_individuals(MILESTONE).unwrap();
    let best = best_individual(&individuals).unwrap();
    assert_eq!(best.generation, Some(4));

    let text = best.gait_table(3).unwrap().render();
    let lines: Vec<&str> = text.lines().collect();

    let header: Vec<&str> = lines[1..5].to_vec();
    assert_eq!(header, vec!["# name: gaitTable", "# type: matrix", "# rows: 3", "# columns: 3"]);

    let data = &lines[5..];
    assert_eq!(data, &["90 90 360", "0 -90 0", "67.5 -45 180"]);
}

#[test]
fn test_render_shape_for_three_modules() {
    let table = decode_genotype(&[0.1, 0.2, 0.3, -0.4, 0.5, -0.6, 0.7, -0.8, 0.9], 3).unwrap();
    let text = table.render();

    assert!(text.starts_with("# Gait Table created by "));
    let header_lines = text.lines().skip(1).take_while(|l| l.starts_with('#')).count();
    let data_lines: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();

    assert_eq!(header_lines, 4);
    assert_eq!(data_lines.len(), 3);
    for line in data_lines {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 3);
        for field in fields {
            assert!(field.parse::<f64>().is_ok(), "not numeric: {}", field);
        }
    }

    assert_eq!(GaitTable::parse(&text).unwrap(), table);
}

#[test]
fn test_decoding_is_deterministic() {
    let genotype = [0.33, -0.12, 0.98, -0.71, 0.05, -0.44];
    let decoder = GenotypeDecoder::new(2);
    assert_eq!(decoder.decode(&genotype).unwrap(), decoder.decode(&genotype).unwrap());
    assert_eq!(
        decoder.decode(&genotype).unwrap().render(),
        decode_genotype(&genotype, 2).unwrap().render()
    );
}

#[test]
fn test_population_with_wrong_module_count() {
    let individuals = load_individuals(MILESTONE).unwrap();
    let tables = decode_population(&individuals, 2);

    assert_eq!(tables.len(), 2);
    for table in tables {
        assert!(matches!(
            table,
            Err(HormodularError::ShapeMismatch {
                expected: 6,
                actual: 9
            })
        ));
    }
}
