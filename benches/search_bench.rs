use criterion::{criterion_group, criterion_main, Criterion, black_box};
use konane::game::{legal_moves, Game};
use konane::search::minimax::SearchParams;
use konane::{Agent, AgentConfig};

fn midgame() -> Game {
    let mut g = Game::new();
    for _ in 0..6 {
        let mv = legal_moves(g.board, g.to_move)[0];
        g.play(mv);
    }
    g
}

fn bench_search(c: &mut Criterion) {
    let g = midgame();
    c.bench_function("agent_depth_3_midgame", |ben| {
        let mut agent = Agent::new(AgentConfig { search: SearchParams { depth: 3, alpha_beta: true }, seed: Some(1) });
        ben.iter(|| {
            let r = agent.choose(black_box(&g.board), g.to_move);
            black_box(r.map(|m| m.nodes).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
