use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use fstidy_core::{
    CleanConfig, DirectoryCleaner, ExclusionSet, ScanConfig, StatsScanner, delete_all_except_ignored,
};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

/// 创建一个测试用的目录：若干文件加一个带内容的子目录
fn create_test_dir(base_path: &Path, name: &str) -> anyhow::Result<()> {
    let dir = base_path.join(name);
    let nested = dir.join("cache").join("objects");
    fs::create_dir_all(&nested)?;

    for i in 0..10 {
        let content = "x".repeat(1024 * (i + 1)); // 1KB到10KB的文件
        fs::write(dir.join(format!("data_{i}.bin")), &content)?;
    }

    for i in 0..5 {
        let cache_content = "cache".repeat(512); // 2.5KB缓存文件
        fs::write(nested.join(format!("cache_{i}.bin")), &cache_content)?;
    }

    Ok(())
}

/// 创建多个测试目录
fn create_multiple_dirs(base_path: &Path, count: usize) -> anyhow::Result<()> {
    for i in 0..count {
        create_test_dir(base_path, &format!("dir_{i:03}"))?;
    }
    Ok(())
}

/// 基准测试：统计中等规模目录树（50个子目录）
fn bench_scan_medium(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_multiple_dirs(temp_dir.path(), 50).unwrap();

    let scanner = StatsScanner::default();

    c.bench_function("scan_50_dirs", |b| {
        b.iter(|| {
            let stats = scanner.scan(black_box(temp_dir.path())).unwrap();
            black_box(stats);
        })
    });
}

/// 基准测试：不同深度限制
fn bench_scan_depth_limits(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_multiple_dirs(temp_dir.path(), 50).unwrap();

    let mut group = c.benchmark_group("scan_depth_limits");

    for max_depth in [0, 1, 2] {
        let scanner = StatsScanner::new(ScanConfig { max_depth });
        group.bench_function(format!("max_depth_{max_depth}"), |b| {
            b.iter(|| {
                let stats = scanner.scan(black_box(temp_dir.path())).unwrap();
                black_box(stats);
            })
        });
    }

    group.finish();
}

/// 基准测试：深度扫描性能
fn bench_deep_scan(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let mut current_path = temp_dir.path().to_path_buf();

    // 创建深层嵌套结构
    for i in 0..20 {
        current_path = current_path.join(format!("level_{i}"));
        fs::create_dir_all(&current_path).unwrap();
        create_test_dir(&current_path, &format!("dir_level_{i}")).unwrap();
    }

    let scanner = StatsScanner::new(ScanConfig { max_depth: 64 });

    c.bench_function("scan_deep_nested_dirs", |b| {
        b.iter(|| {
            let stats = scanner.scan(black_box(temp_dir.path())).unwrap();
            black_box(stats);
        })
    });
}

/// 基准测试：清理预览（dry run）
fn bench_clean_dry_run(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_multiple_dirs(temp_dir.path(), 50).unwrap();

    let cleaner = DirectoryCleaner::new(CleanConfig {
        exclusions: ["dir_000", "dir_001"].into_iter().collect(),
        dry_run: true,
    });

    c.bench_function("clean_50_dirs_dry_run", |b| {
        b.iter(|| {
            let result = cleaner.clean(black_box(temp_dir.path())).unwrap();
            black_box(result);
        })
    });
}

/// 基准测试：实际删除（每轮重新生成目录）
fn bench_delete_except_ignored(c: &mut Criterion) {
    let exclusions: ExclusionSet = ["dir_000"].into_iter().collect();

    c.bench_function("delete_20_dirs", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().unwrap();
                create_multiple_dirs(temp_dir.path(), 20).unwrap();
                temp_dir
            },
            |temp_dir| {
                delete_all_except_ignored(temp_dir.path(), &exclusions).unwrap();
                black_box(temp_dir);
            },
            BatchSize::PerIteration,
        )
    });
}

criterion_group!(
    benches,
    bench_scan_medium,
    bench_scan_depth_limits,
    bench_deep_scan,
    bench_clean_dry_run,
    bench_delete_except_ignored
);
criterion_main!(benches);
