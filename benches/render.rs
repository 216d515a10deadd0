use chatmark::core::message::Message;
use chatmark::ui::markdown::{parse_message, render_message, MessageRenderConfig};
use chatmark::ui::theme::Theme;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn make_reply(paragraphs: usize) -> String {
    let mut reply = String::new();
    for i in 0..paragraphs {
        reply.push_str("Use **borrowing** with `&str` and *lifetimes* where it helps.\n");
        if i % 4 == 0 {
            reply.push_str("```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n");
        }
    }
    reply
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::dark_default();

    for &paragraphs in &[10usize, 200usize] {
        let message = Message::assistant(make_reply(paragraphs));

        let mut group = c.benchmark_group(format!("reply_paragraphs{paragraphs}"));
        group.throughput(Throughput::Bytes(message.content.len() as u64));

        group.bench_function(BenchmarkId::new("parse", paragraphs), |b| {
            b.iter(|| parse_message(&message.content).len())
        });
        group.bench_function(BenchmarkId::new("render_plain", paragraphs), |b| {
            let cfg = MessageRenderConfig::new().with_terminal_width(Some(100));
            b.iter(|| render_message(&message, &theme, &cfg))
        });
        group.bench_function(BenchmarkId::new("render_syntax", paragraphs), |b| {
            let cfg = MessageRenderConfig::new()
                .with_syntax(true)
                .with_terminal_width(Some(100));
            b.iter(|| render_message(&message, &theme, &cfg))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
