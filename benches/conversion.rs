use cfgsyn::converter::{ConversionConfig, Converter, SilentProgress};
use cfgsyn::parser::NestingTracker;
use cfgsyn::xml::TokenSource;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use std::io::{BufReader, Cursor};
use tempfile::TempDir;

const TYPES: [&str; 4] = ["CELL", "NODE", "LINK", "TRX"];

/// Generate a synthetic export with `num_instances` managed objects
fn generate_test_export(num_instances: usize, attributes_per_instance: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<bulkCmConfigDataFile>
  <syndata FunctionType="BSC6900UMTS" Id="NE=RNC01" productversion="V900R019" nermversion="V1" objId="1">
"#,
    );

    for i in 0..num_instances {
        let mo_type = TYPES[i % TYPES.len()];
        content.push_str(&format!("    <class><{}><attributes>", mo_type));
        for j in 0..attributes_per_instance {
            content.push_str(&format!("<ATTR{j}>value {i}, {j}</ATTR{j}>"));
        }
        content.push_str(&format!("</attributes></{}></class>\n", mo_type));
    }

    content.push_str(
        r#"  </syndata>
  <fileFooter label="full" ExportResult="SUCCESS" dateTime="2020-01-01 10:00:00"/>
</bulkCmConfigDataFile>
"#,
    );
    content
}

/// Benchmark tokenizing and instance assembly without output
fn bench_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("instance_tracking");

    for num_instances in [1_000, 10_000] {
        let xml = generate_test_export(num_instances, 20);
        group.throughput(Throughput::Bytes(xml.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}instances", num_instances)),
            &xml,
            |b, xml| {
                b.iter(|| {
                    let source = TokenSource::new(BufReader::new(Cursor::new(xml.as_bytes())));
                    let mut tracker = NestingTracker::new();
                    let mut completed = 0usize;
                    for token in source.tokens() {
                        let token = token.expect("Tokenizing failed");
                        if tracker.feed(&token).is_some() {
                            completed += 1;
                        }
                    }
                    completed
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full two-pass discovery conversion
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery_conversion");
    group.sample_size(20);

    for num_instances in [1_000, 10_000] {
        let xml = generate_test_export(num_instances, 20);
        group.throughput(Throughput::Elements(num_instances as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}instances", num_instances)),
            &xml,
            |b, xml| {
                b.iter_batched(
                    || {
                        let temp_dir = TempDir::new().unwrap();
                        let input_path = temp_dir.path().join("NE01.xml");
                        let output_dir = temp_dir.path().join("out");
                        fs::write(&input_path, xml).unwrap();
                        fs::create_dir(&output_dir).unwrap();
                        (temp_dir, input_path, output_dir)
                    },
                    |(temp_dir, input_path, output_dir)| {
                        let _stats = Converter::new(ConversionConfig::new(&output_dir))
                            .with_progress(SilentProgress)
                            .convert(&input_path)
                            .expect("Conversion failed");
                        drop(temp_dir);
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tracking, bench_conversion);
criterion_main!(benches);
