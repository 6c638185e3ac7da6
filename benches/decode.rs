use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io::Cursor;

fn generate_binary_ply(vertex_count: usize) -> Vec<u8> {
    let face_count = vertex_count - 2;
    let header = format!(
        r#"ply
format binary_little_endian 1.0
element vertex {vertex_count}
property float x
property float y
property float z
property uchar red
property uchar green
property uchar blue
element face {face_count}
property list uchar int vertex_indices
end_header
"#
    );

    let mut binary_data = header.into_bytes();
    for i in 0..vertex_count {
        let base = i as f32 * 0.01;
        binary_data.extend_from_slice(&base.to_le_bytes());
        binary_data.extend_from_slice(&(base + 1.0).to_le_bytes());
        binary_data.extend_from_slice(&(base + 2.0).to_le_bytes());
        binary_data.extend_from_slice(&[(i % 256) as u8, 128, 255]);
    }
    for i in 0..face_count as u32 {
        binary_data.push(3);
        for index in [i, i + 1, i + 2] {
            binary_data.extend_from_slice(&index.to_le_bytes());
        }
    }
    binary_data
}

fn generate_ascii_ply(vertex_count: usize) -> String {
    let face_count = vertex_count - 2;
    let mut ply = format!(
        r#"ply
format ascii 1.0
element vertex {vertex_count}
property float x
property float y
property float z
property float nx
property float ny
property float nz
element face {face_count}
property list uchar int vertex_indices
end_header
"#
    );

    for i in 0..vertex_count {
        let base = i as f32 * 0.01;
        ply.push_str(&format!(
            "{} {} {} 0.0 0.0 1.0\n",
            base,
            base + 1.0,
            base + 2.0
        ));
    }
    for i in 0..face_count {
        ply.push_str(&format!("3 {} {} {}\n", i, i + 1, i + 2));
    }
    ply
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let vertex_count = 10_000;

    let binary_data = generate_binary_ply(vertex_count);
    group.throughput(Throughput::Bytes(binary_data.len() as u64));
    group.bench_function("binary_colored", |b| {
        b.iter(|| {
            let mesh = ply_mesh::from_reader(Cursor::new(black_box(&binary_data))).unwrap();
            black_box(mesh)
        });
    });

    let ascii_data = generate_ascii_ply(vertex_count);
    group.throughput(Throughput::Bytes(ascii_data.len() as u64));
    group.bench_function("ascii_normals", |b| {
        b.iter(|| {
            let mesh = ply_mesh::from_str(black_box(&ascii_data)).unwrap();
            black_box(mesh)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_decode);
criterion_main!(benches);
