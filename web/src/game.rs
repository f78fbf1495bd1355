use crate::utils::js_random_seed;
use sapper_core as game;
use yew::prelude::*;

/// CSS class for a tile, matching the stylesheet names.
fn tile_class(status: game::TileStatus) -> &'static str {
    use game::TileStatus::*;
    match status {
        Hidden => "hidden",
        Flagged => "marked",
        Revealed(_) => "number",
        ExplodedMine => "mine",
    }
}

/// Text drawn inside a tile: the adjacent mine count, blank for zero.
fn tile_label(status: game::TileStatus) -> String {
    match status.adjacent_mine_count() {
        Some(count) if count > 0 => count.to_string(),
        _ => String::new(),
    }
}

fn game_status_class(status: game::GameStatus) -> &'static str {
    use game::GameStatus::*;
    match status {
        InProgress => "in-progress",
        Won => "win",
        Lost => "lose",
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    Flag(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    x: game::Coord,
    y: game::Coord,
    status: game::TileStatus,
    #[prop_or_default]
    triggered: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<Msg>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        x,
        y,
        status,
        triggered,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "tile",
        tile_class(status),
        triggered.then_some("oops"),
        locked.then_some("locked")
    );

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("({}, {}) click", x, y);
            callback.emit(Msg::Reveal((x, y)));
        })
    };

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({}, {}) context menu", x, y);
        callback.emit(Msg::Flag((x, y)));
    });

    html! {
        <div {class} {onclick} {oncontextmenu}>{tile_label(status)}</div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Engine built by whoever mounts the view.
    pub engine: game::GameEngine,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::GameEngine,
    suppress_menu: Callback<MouseEvent>,
}

impl GameView {
    fn with_engine(engine: game::GameEngine) -> Self {
        Self {
            engine,
            suppress_menu: Callback::from(|e: MouseEvent| e.prevent_default()),
        }
    }

    fn reveal_tile(&mut self, coords: game::Coord2) -> bool {
        match self.engine.reveal_tile(coords) {
            Ok(outcome) => {
                log::debug!("reveal {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::error!("reveal {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn flag_tile(&mut self, coords: game::Coord2) -> bool {
        match self.engine.flag_tile(coords) {
            Ok(outcome) => {
                log::debug!("flag {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::error!("flag {:?} rejected: {}", coords, err);
                false
            }
        }
    }

    fn new_game(&mut self) -> bool {
        let config = self.engine.mine_layout().game_config();
        match game::GameEngine::new_game(config, js_random_seed()) {
            Ok(engine) => {
                self.engine = engine;
                true
            }
            Err(err) => {
                log::error!("could not start a new game: {}", err);
                false
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::with_engine(ctx.props().engine.clone())
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(coords) => self.reveal_tile(coords),
            Flag(coords) => self.flag_tile(coords),
            NewGame => self.new_game(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.engine.snapshot();
        let locked = snapshot.status.is_finished();
        let status_class = game_status_class(snapshot.status);
        let board_style = format!("--size: {}", snapshot.size);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let callback = ctx.link().callback(|msg: Msg| msg);

        html! {
            <div class="sapper" oncontextmenu={self.suppress_menu.clone()}>
                <header>
                    <h1 class="title">{"Minesweeper"}</h1>
                    <p class="subtitle">{snapshot.status_line.clone()}</p>
                    <button class={classes!("new-game", status_class)} onclick={cb_new_game}>{"New game"}</button>
                </header>
                <div class="board" style={board_style}>
                    {
                        for snapshot.tiles.iter().map(|tile| {
                            let x = tile.x;
                            let y = tile.y;
                            let status = tile.status;
                            let triggered = snapshot.triggered_mine == Some((x, y));
                            let callback = callback.clone();
                            html! {
                                <TileView {x} {y} {status} {triggered} {locked} {callback}/>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_classes_follow_stylesheet_names() {
        use game::TileStatus::*;

        assert_eq!(tile_class(Hidden), "hidden");
        assert_eq!(tile_class(Flagged), "marked");
        assert_eq!(tile_class(Revealed(3)), "number");
        assert_eq!(tile_class(ExplodedMine), "mine");
    }

    #[test]
    fn zero_tiles_render_blank() {
        use game::TileStatus::*;

        assert_eq!(tile_label(Revealed(0)), "");
        assert_eq!(tile_label(Revealed(4)), "4");
        assert_eq!(tile_label(Hidden), "");
        assert_eq!(tile_label(ExplodedMine), "");
    }

    #[test]
    fn view_reports_updates_only_for_real_changes() {
        let layout = game::MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut view = GameView::with_engine(game::GameEngine::new(layout));

        assert!(view.flag_tile((1, 1)));
        assert!(!view.reveal_tile((1, 1)));
        assert!(view.flag_tile((1, 1)));
        assert!(view.reveal_tile((1, 1)));
        assert!(!view.reveal_tile((1, 1)));
        assert!(!view.reveal_tile((5, 5)));

        assert!(view.reveal_tile((0, 0)));
        assert_eq!(game_status_class(view.engine.status()), "lose");
        assert!(!view.flag_tile((0, 1)));
    }

    #[test]
    fn context_menu_handler_is_built_once_per_view() {
        let layout = game::MineLayout::from_mine_coords(3, &[(2, 2)]).unwrap();
        let mut view = GameView::with_engine(game::GameEngine::new(layout));
        let handler = view.suppress_menu.clone();

        assert!(view.flag_tile((0, 0)));
        assert!(view.flag_tile((0, 0)));
        assert!(view.reveal_tile((0, 0)));

        assert_eq!(view.suppress_menu, handler);
        assert_eq!(game_status_class(view.engine.status()), "win");
    }
}
